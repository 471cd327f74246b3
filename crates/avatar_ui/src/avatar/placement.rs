//! Perimeter placement for avatar status items.
//!
//! A status item is centered on the avatar and moved outward along the angle assigned to its
//! [`Position`] with `rotate(θ) translate(r) rotate(-θ)`, which lands it at polar coordinates
//! `(r, θ)` while leaving the badge content upright.

use serde::{Deserialize, Serialize};

use super::outline::Outline;
use crate::{Length, ReadingDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named perimeter location for a status item.
pub enum Position {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top-right diagonal.
    TopRight,
    /// Top-left diagonal.
    TopLeft,
    /// Bottom-right diagonal.
    BottomRight,
    /// Bottom-left diagonal.
    BottomLeft,
}

impl Position {
    /// Every position, in declaration order.
    pub const ALL: [Position; 8] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopRight,
        Self::TopLeft,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Stable token used for `data-ui-position` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// Parses a position token, accepting kebab-case and camelCase spellings.
    ///
    /// Unknown tokens fall back to [`Position::Bottom`].
    pub fn from_token_lossy(token: &str) -> Self {
        let normalized: String = token
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_'))
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "topright" => Self::TopRight,
            "topleft" => Self::TopLeft,
            "bottomright" => Self::BottomRight,
            "bottomleft" => Self::BottomLeft,
            _ => {
                leptos::logging::warn!("unknown status item position `{token}`, using bottom");
                Self::Bottom
            }
        }
    }

    /// Horizontal mirror of the position.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Top => Self::Top,
            Self::Bottom => Self::Bottom,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::TopRight => Self::TopLeft,
            Self::TopLeft => Self::TopRight,
            Self::BottomRight => Self::BottomLeft,
            Self::BottomLeft => Self::BottomRight,
        }
    }

    /// Physical position after applying the reading direction.
    pub const fn resolve(self, direction: ReadingDirection) -> Self {
        if direction.is_rtl() {
            self.mirrored()
        } else {
            self
        }
    }

    /// Clockwise angle from the positive x axis, in degrees (screen y grows downward).
    pub const fn angle_deg(self) -> i16 {
        match self {
            Self::Right => 0,
            Self::BottomRight => 45,
            Self::Bottom => 90,
            Self::BottomLeft => 135,
            Self::Left => 180,
            Self::TopLeft => -135,
            Self::Top => -90,
            Self::TopRight => -45,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Placement of one status item relative to the avatar center.
pub struct StatusItemTransform {
    /// Rotation angle in degrees.
    pub angle_deg: i16,
    /// Distance from the avatar center.
    pub radius: Length,
}

impl StatusItemTransform {
    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        let radius = self.radius.to_css();
        if self.angle_deg == 0 {
            return format!("translate({radius})");
        }
        let angle = self.angle_deg;
        let undo = -angle;
        format!("rotate({angle}deg) translate({radius}) rotate({undo}deg)")
    }

    /// Equivalent `(x, y)` offset in pixels, when the radius is a pixel length.
    pub fn polar_offset(&self) -> Option<(f64, f64)> {
        let radius = self.radius.as_px()?;
        let theta = f64::from(self.angle_deg).to_radians();
        Some((radius * theta.cos(), radius * theta.sin()))
    }
}

/// Distance from the avatar center to the perimeter the status items sit on.
///
/// `(size + outline width + outline offset) / 2`, with a missing outline contributing zero.
pub fn placement_radius(size: &Length, outline: Option<&Outline>) -> Length {
    match outline {
        Some(outline) => Length::sum([size, &outline.width, &outline.offset]).half(),
        None => size.half(),
    }
}

/// Transform placing a status item at `position` on an avatar of `size`.
pub fn placement_transform(
    position: Position,
    direction: ReadingDirection,
    size: &Length,
    outline: Option<&Outline>,
) -> StatusItemTransform {
    StatusItemTransform {
        angle_deg: position.resolve(direction).angle_deg(),
        radius: placement_radius(size, outline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::outline::{OutlineSpec, AVATAR_OUTLINE_DEFAULTS};
    use pretty_assertions::assert_eq;

    fn outline(width: f64, offset: f64) -> Outline {
        OutlineSpec::default()
            .width(width)
            .offset(offset)
            .resolve(&AVATAR_OUTLINE_DEFAULTS)
    }

    #[test]
    fn ltr_angles_match_table() {
        let size = Length::Px(32.0);
        let expected = [
            (Position::Right, 0),
            (Position::Bottom, 90),
            (Position::Left, 180),
            (Position::Top, -90),
            (Position::TopRight, -45),
            (Position::TopLeft, -135),
            (Position::BottomRight, 45),
            (Position::BottomLeft, 135),
        ];
        for (position, angle) in expected {
            let transform = placement_transform(position, ReadingDirection::Ltr, &size, None);
            assert_eq!(transform.angle_deg, angle, "{position:?}");
        }
    }

    #[test]
    fn rtl_mirrors_horizontal_positions() {
        let size = Length::Px(40.0);
        let ring = outline(4.0, 2.0);
        for position in Position::ALL {
            let rtl = placement_transform(position, ReadingDirection::Rtl, &size, Some(&ring));
            let ltr_mirror =
                placement_transform(position.mirrored(), ReadingDirection::Ltr, &size, Some(&ring));
            assert_eq!(rtl, ltr_mirror, "{position:?}");
        }
        for position in [Position::Top, Position::Bottom] {
            assert_eq!(
                placement_transform(position, ReadingDirection::Rtl, &size, None),
                placement_transform(position, ReadingDirection::Ltr, &size, None)
            );
        }
    }

    #[test]
    fn mirror_is_an_involution() {
        for position in Position::ALL {
            assert_eq!(position.mirrored().mirrored(), position);
        }
        assert_eq!(Position::TopLeft.mirrored(), Position::TopRight);
        assert_eq!(Position::BottomLeft.mirrored(), Position::BottomRight);
    }

    #[test]
    fn radius_is_half_of_size_without_outline() {
        assert_eq!(placement_radius(&Length::Px(32.0), None), Length::Px(16.0));
        assert_eq!(
            placement_radius(&Length::Px(32.0), Some(&outline(0.0, 0.0))),
            Length::Px(16.0)
        );
    }

    #[test]
    fn radius_grows_with_size_width_and_offset() {
        let radius = |size: f64, width: f64, offset: f64| {
            placement_radius(&Length::Px(size), Some(&outline(width, offset)))
                .as_px()
                .unwrap_or(f64::NAN)
        };
        let base = radius(32.0, 4.0, 2.0);
        assert_eq!(base, 19.0);
        assert!(radius(48.0, 4.0, 2.0) > base);
        assert!(radius(32.0, 6.0, 2.0) > base);
        assert!(radius(32.0, 4.0, 5.0) > base);
    }

    #[test]
    fn mixed_units_fall_back_to_calc() {
        let radius = placement_radius(&Length::Rem(2.0), Some(&outline(4.0, 2.0)));
        assert_eq!(radius.to_css(), "calc((6px + 2rem) * 0.5)");
    }

    #[test]
    fn renders_css_transforms() {
        let size = Length::Px(32.0);
        assert_eq!(
            placement_transform(Position::Right, ReadingDirection::Ltr, &size, None).to_css(),
            "translate(16px)"
        );
        assert_eq!(
            placement_transform(Position::TopRight, ReadingDirection::Ltr, &size, None).to_css(),
            "rotate(-45deg) translate(16px) rotate(45deg)"
        );
        assert_eq!(
            placement_transform(Position::TopRight, ReadingDirection::Rtl, &size, None).to_css(),
            "rotate(-135deg) translate(16px) rotate(135deg)"
        );
    }

    #[test]
    fn transform_matches_polar_coordinates() {
        let size = Length::Px(32.0);
        let offset = |position| {
            placement_transform(position, ReadingDirection::Ltr, &size, None)
                .polar_offset()
                .unwrap_or((f64::NAN, f64::NAN))
        };
        let close = |(x, y): (f64, f64), (ex, ey): (f64, f64)| {
            (x - ex).abs() < 1e-9 && (y - ey).abs() < 1e-9
        };
        assert!(close(offset(Position::Right), (16.0, 0.0)));
        assert!(close(offset(Position::Bottom), (0.0, 16.0)));
        assert!(close(offset(Position::Left), (-16.0, 0.0)));
        assert!(close(offset(Position::Top), (0.0, -16.0)));
        let diagonal = 16.0 / 2f64.sqrt();
        assert!(close(offset(Position::TopRight), (diagonal, -diagonal)));
    }

    #[test]
    fn unknown_tokens_fall_back_to_bottom() {
        assert_eq!(Position::from_token_lossy("topRight"), Position::TopRight);
        assert_eq!(Position::from_token_lossy("bottom-left"), Position::BottomLeft);
        assert_eq!(Position::from_token_lossy("center"), Position::Bottom);
    }
}
