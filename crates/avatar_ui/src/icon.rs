//! Centralized icon catalog for avatar glyphs and status item badges.
//!
//! Icons are semantic identifiers rendered by a single SVG component so primitives never embed
//! raw markup. Every glyph is drawn on a 24px grid with `currentColor` fill.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::primitives::{merge_layout_class, InlineStyle};
use crate::Length;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon identifiers.
pub enum IconName {
    /// Generic person silhouette.
    Person,
    /// Online/presence dot.
    Presence,
    /// Away clock.
    Away,
    /// Do-not-disturb bar.
    DoNotDisturb,
    /// Checkmark.
    Checkmark,
    /// Dismiss/close cross.
    Dismiss,
    /// Favorite star.
    Star,
    /// Microphone.
    Mic,
    /// Warning triangle.
    Warning,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Presence => "presence",
            Self::Away => "away",
            Self::DoNotDisturb => "do-not-disturb",
            Self::Checkmark => "checkmark",
            Self::Dismiss => "dismiss",
            Self::Star => "star",
            Self::Mic => "mic",
            Self::Warning => "warning",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Person => {
                r#"<circle cx="12" cy="8" r="4"/><path d="M4 20c0-4.42 3.58-7 8-7s8 2.58 8 7v1H4v-1Z"/>"#
            }
            Self::Presence => r#"<circle cx="12" cy="12" r="8"/>"#,
            Self::Away => {
                r#"<path fill-rule="evenodd" d="M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm-1 4h2v5.2l3.5 2.1-1 1.7L11 13.3V7Z"/>"#
            }
            Self::DoNotDisturb => {
                r#"<path fill-rule="evenodd" d="M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm-5 8h10v2H7v-2Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Star => {
                r#"<path d="M12 2.5l2.9 6.1 6.6.8-4.9 4.6 1.3 6.6L12 17.3l-5.9 3.3 1.3-6.6-4.9-4.6 6.6-.8L12 2.5Z"/>"#
            }
            Self::Mic => {
                r#"<path d="M12 3a3 3 0 0 0-3 3v6a3 3 0 0 0 6 0V6a3 3 0 0 0-3-3Zm-7 9h2a5 5 0 0 0 10 0h2a7 7 0 0 1-6 6.93V21h-2v-2.07A7 7 0 0 1 5 12Z"/>"#
            }
            Self::Warning => {
                r#"<path fill-rule="evenodd" d="M12 2 1 21h22L12 2Zm-1 7h2v6h-2V9Zm0 8h2v2h-2v-2Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px badge glyph.
    Xs,
    /// 16px standard icon.
    #[default]
    Sm,
    /// 20px medium icon.
    Md,
    /// 24px large icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Icon descriptor accepted by avatars and status items.
pub struct IconSpec {
    /// Glyph to render.
    pub name: IconName,
    /// Explicit rendered size; the consumer's default applies when absent.
    #[serde(default)]
    pub size: Option<Length>,
    /// Icon color; inherits `currentColor` when absent.
    #[serde(default)]
    pub color: Option<String>,
}

impl IconSpec {
    /// Descriptor for `name` with consumer-default size and color.
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: None,
            color: None,
        }
    }

    /// Sets an explicit size.
    pub fn with_size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the icon color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<IconName> for IconSpec {
    fn from(name: IconName) -> Self {
        Self::new(name)
    }
}

#[component]
/// Renders an SVG glyph from the centralized icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Arbitrary length overriding `size`, e.g. an avatar's font size.
    #[prop(optional)]
    dimension: Option<Length>,
    /// Fill color override.
    #[prop(optional, into)]
    color: Option<String>,
    /// Extra class appended to `ui-icon`.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let mut style = InlineStyle::default();
    if let Some(dimension) = dimension.as_ref() {
        style.push("width", dimension.to_css());
        style.push("height", dimension.to_css());
    }
    if let Some(color) = color.filter(|color| !color.is_empty()) {
        style.push("color", color);
    }

    view! {
        <svg
            class=merge_layout_class("ui-icon", layout_class)
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            style=style.to_css_option()
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
