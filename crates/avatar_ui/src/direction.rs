//! Reading-direction provider used to mirror direction-sensitive layout.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Document reading direction.
pub enum ReadingDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl ReadingDirection {
    /// Stable token matching the HTML `dir` attribute values.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Interprets a raw `dir` attribute. Anything other than `rtl` reads as left-to-right.
    pub fn from_dir_attribute(value: Option<&str>) -> Self {
        match value {
            Some(dir) if dir.trim().eq_ignore_ascii_case("rtl") => Self::Rtl,
            _ => Self::Ltr,
        }
    }

    /// Returns `true` for right-to-left.
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

#[derive(Clone, Copy)]
struct ReadingDirectionContext(Signal<ReadingDirection>);

/// Makes `direction` available to descendant primitives.
pub fn provide_reading_direction(direction: impl Into<MaybeSignal<ReadingDirection>>) {
    let direction = direction.into();
    provide_context(ReadingDirectionContext(Signal::derive(move || direction.get())));
}

/// Current reading direction.
///
/// Uses the nearest [`provide_reading_direction`] value, falling back to the document root's
/// `dir` attribute at call time.
pub fn use_reading_direction() -> Signal<ReadingDirection> {
    if let Some(ReadingDirectionContext(direction)) = use_context::<ReadingDirectionContext>() {
        return direction;
    }
    let dir = document()
        .document_element()
        .and_then(|root| root.get_attribute("dir"));
    Signal::derive(move || ReadingDirection::from_dir_attribute(dir.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dir_attribute_case_insensitively() {
        assert_eq!(
            ReadingDirection::from_dir_attribute(Some("RTL")),
            ReadingDirection::Rtl
        );
        assert_eq!(
            ReadingDirection::from_dir_attribute(Some("auto")),
            ReadingDirection::Ltr
        );
        assert_eq!(ReadingDirection::from_dir_attribute(None), ReadingDirection::Ltr);
    }

    #[test]
    fn only_rtl_mirrors() {
        assert!(ReadingDirection::Rtl.is_rtl());
        assert!(!ReadingDirection::Ltr.is_rtl());
        assert!(!ReadingDirection::default().is_rtl());
    }
}
