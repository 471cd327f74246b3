//! Outline rings drawn around avatars and status items.

use serde::{Deserialize, Serialize};

use crate::primitives::InlineStyle;
use crate::Length;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// CSS `outline-style` values.
pub enum OutlineStyle {
    /// Solid line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Double line.
    Double,
    /// Carved groove.
    Groove,
    /// Raised ridge.
    Ridge,
    /// Inset bevel.
    Inset,
    /// Outset bevel.
    Outset,
    /// No outline.
    None,
}

impl OutlineStyle {
    /// CSS keyword.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
            Self::Groove => "groove",
            Self::Ridge => "ridge",
            Self::Inset => "inset",
            Self::Outset => "outset",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Fully resolved outline.
pub struct Outline {
    /// Outline color.
    pub color: String,
    /// Gap between the element edge and the outline.
    pub offset: Length,
    /// Line style.
    pub style: OutlineStyle,
    /// Line width.
    pub width: Length,
}

impl Outline {
    pub(crate) fn write_style(&self, style: &mut InlineStyle) {
        style.push("outline-color", self.color.clone());
        style.push("outline-offset", self.offset.to_css());
        style.push("outline-style", self.style.token());
        style.push("outline-width", self.width.to_css());
    }

    /// Inline CSS declarations for the outline.
    pub fn to_css(&self) -> String {
        let mut style = InlineStyle::default();
        self.write_style(&mut style);
        style.to_css()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Fallback values used to complete a partial [`OutlineSpec`].
pub struct OutlineDefaults {
    /// Default color.
    pub color: &'static str,
    /// Default offset in pixels.
    pub offset_px: f64,
    /// Default style.
    pub style: OutlineStyle,
    /// Default width in pixels.
    pub width_px: f64,
}

/// Avatar ring defaults.
pub const AVATAR_OUTLINE_DEFAULTS: OutlineDefaults = OutlineDefaults {
    color: "var(--green-color-60)",
    offset_px: 2.0,
    style: OutlineStyle::Solid,
    width_px: 4.0,
};

/// Status item ring defaults.
pub const STATUS_ITEM_OUTLINE_DEFAULTS: OutlineDefaults = OutlineDefaults {
    color: "var(--grey-color-80)",
    offset_px: 0.0,
    style: OutlineStyle::Solid,
    width_px: 2.0,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Partially specified outline; missing fields resolve against an [`OutlineDefaults`] table.
pub struct OutlineSpec {
    /// Outline color.
    #[serde(default)]
    pub color: Option<String>,
    /// Outline offset.
    #[serde(default)]
    pub offset: Option<Length>,
    /// Outline style.
    #[serde(default)]
    pub style: Option<OutlineStyle>,
    /// Outline width.
    #[serde(default)]
    pub width: Option<Length>,
}

impl OutlineSpec {
    /// Sets the color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the offset.
    pub fn offset(mut self, offset: impl Into<Length>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Sets the line style.
    pub fn style(mut self, style: OutlineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the width.
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Fills missing fields from `defaults`.
    pub fn resolve(&self, defaults: &OutlineDefaults) -> Outline {
        Outline {
            color: self
                .color
                .clone()
                .unwrap_or_else(|| defaults.color.to_string()),
            offset: self
                .offset
                .clone()
                .unwrap_or(Length::Px(defaults.offset_px)),
            style: self.style.unwrap_or(defaults.style),
            width: self.width.clone().unwrap_or(Length::Px(defaults.width_px)),
        }
    }
}
