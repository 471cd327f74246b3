//! Fallback avatar color themes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Named background theme for fallback avatars.
pub enum AvatarTheme {
    /// Red.
    Red,
    /// Red-orange.
    RedOrange,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Yellow-green.
    YellowGreen,
    /// Green.
    Green,
    /// Blue-green.
    BlueGreen,
    /// Blue.
    Blue,
    /// Blue-violet.
    BlueViolet,
    /// Violet.
    Violet,
    /// Violet-red.
    VioletRed,
    /// Grey.
    Grey,
}

impl AvatarTheme {
    /// Theme set in palette order; seeded selection indexes into this list.
    pub const ALL: [AvatarTheme; 12] = [
        Self::Red,
        Self::RedOrange,
        Self::Orange,
        Self::Yellow,
        Self::YellowGreen,
        Self::Green,
        Self::BlueGreen,
        Self::Blue,
        Self::BlueViolet,
        Self::Violet,
        Self::VioletRed,
        Self::Grey,
    ];

    /// Stable token used in theme class names.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::RedOrange => "red-orange",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::YellowGreen => "yellow-green",
            Self::Green => "green",
            Self::BlueGreen => "blue-green",
            Self::Blue => "blue",
            Self::BlueViolet => "blue-violet",
            Self::Violet => "violet",
            Self::VioletRed => "violet-red",
            Self::Grey => "grey",
        }
    }

    /// Class applied to the fallback container.
    pub fn class(self) -> String {
        format!("ui-avatar-theme-{}", self.token())
    }

    /// Theme at `index` in [`AvatarTheme::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Number of themes in the palette.
pub const AVATAR_THEME_COUNT: usize = AvatarTheme::ALL.len();

/// Maps a seed value onto the palette: floored, then reduced modulo the palette size.
///
/// The remainder keeps the sign of the seed, so a negative remainder selects no theme; exact
/// negative multiples of the palette size land on the first theme. Returns `None` for NaN or
/// infinite seeds.
pub fn theme_index_from_seed(seed: f64) -> Option<usize> {
    if !seed.is_finite() {
        return None;
    }
    let index = seed.floor() % AVATAR_THEME_COUNT as f64;
    (index >= 0.0).then_some(index as usize)
}

/// Maps a uniform draw in `[0, 1)` onto the palette with equal weight per theme.
pub fn theme_index_from_draw(unit: f64) -> usize {
    let index = (unit.clamp(0.0, 1.0) * AVATAR_THEME_COUNT as f64).floor() as usize;
    index.min(AVATAR_THEME_COUNT - 1)
}

/// Resolves the seeded theme index for one fallback avatar instance.
///
/// `randomize` wins over `hash`; `hash` is only evaluated when randomization is off, and `draw`
/// only when it is on. Without either, no seeded theme applies.
pub fn resolve_theme_index(
    randomize: bool,
    hash: Option<&dyn Fn() -> f64>,
    draw: impl FnOnce() -> f64,
) -> Option<usize> {
    if randomize {
        return Some(theme_index_from_draw(draw()));
    }
    hash.and_then(|hash| theme_index_from_seed(hash()))
}

/// Uniform draw from the browser's `Math.random`.
pub(crate) fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn hash_result_wraps_modulo_palette() {
        assert_eq!(resolve_theme_index(false, Some(&|| 13.0), || 0.0), Some(1));
        assert_eq!(resolve_theme_index(false, Some(&|| 13.9), || 0.0), Some(1));
        assert_eq!(resolve_theme_index(false, Some(&|| 11.0), || 0.0), Some(11));
    }

    #[test]
    fn negative_remainders_and_non_finite_seeds_select_no_theme() {
        assert_eq!(theme_index_from_seed(-1.0), None);
        assert_eq!(theme_index_from_seed(-0.5), None);
        assert_eq!(theme_index_from_seed(-13.0), None);
        assert_eq!(theme_index_from_seed(-12.0), Some(0));
        assert_eq!(theme_index_from_seed(-24.0), Some(0));
        assert_eq!(theme_index_from_seed(f64::NAN), None);
        assert_eq!(theme_index_from_seed(f64::INFINITY), None);
    }

    #[test]
    fn no_seed_means_no_theme() {
        assert_eq!(resolve_theme_index(false, None, || 0.5), None);
    }

    #[test]
    fn randomize_skips_hash_and_stays_in_range() {
        let mut rng = rand::thread_rng();
        let hash = || -> f64 { panic!("hash evaluated") };
        for _ in 0..1_000 {
            let index = resolve_theme_index(true, Some(&hash), || rng.gen::<f64>());
            let index = index.unwrap_or(usize::MAX);
            assert!(index < AVATAR_THEME_COUNT, "index {index} out of range");
        }
    }

    #[test]
    fn draws_cover_every_theme_evenly() {
        let mut counts = [0usize; AVATAR_THEME_COUNT];
        let steps = AVATAR_THEME_COUNT * 100;
        for step in 0..steps {
            counts[theme_index_from_draw((step as f64 + 0.5) / steps as f64)] += 1;
        }
        assert!(counts.iter().all(|count| *count == 100));
        assert_eq!(theme_index_from_draw(0.999_999_9), AVATAR_THEME_COUNT - 1);
        assert_eq!(theme_index_from_draw(1.0), AVATAR_THEME_COUNT - 1);
    }

    #[test]
    fn palette_order_and_classes() {
        assert_eq!(AVATAR_THEME_COUNT, 12);
        assert_eq!(AvatarTheme::from_index(1), Some(AvatarTheme::RedOrange));
        assert_eq!(AvatarTheme::from_index(12), None);
        assert_eq!(AvatarTheme::BlueViolet.class(), "ui-avatar-theme-blue-violet");
    }
}
