//! Shared helpers and overlay primitives composed by the avatar.

use leptos::*;

mod overlays;

pub use overlays::{wrap_if, wrap_with, Tooltip, TooltipConfig, TooltipPlacement};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered inline style declarations. Later entries win, matching CSS cascade order.
pub(crate) struct InlineStyle {
    entries: Vec<String>,
}

impl InlineStyle {
    pub(crate) fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.push(format!("{property}: {}", value.into()));
    }

    /// Appends caller-supplied declarations verbatim at the current position.
    pub(crate) fn push_raw(&mut self, css: &str) {
        let css = css.trim().trim_end_matches(';').trim();
        if !css.is_empty() {
            self.entries.push(css.to_string());
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn to_css(&self) -> String {
        self.entries.join("; ")
    }

    pub(crate) fn to_css_option(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_style_keeps_raw_declarations_in_order() {
        let mut style = InlineStyle::default();
        style.push("width", "32px");
        style.push("height", "32px");
        style.push_raw(" border-radius: 4px; ");
        assert_eq!(style.to_css(), "width: 32px; height: 32px; border-radius: 4px");
    }

    #[test]
    fn empty_inline_style_renders_no_attribute() {
        let mut style = InlineStyle::default();
        style.push_raw("  ;");
        assert_eq!(style.to_css_option(), None);
    }

    #[test]
    fn merges_layout_classes() {
        assert_eq!(merge_layout_class("ui-avatar", Some("profile")), "ui-avatar profile");
        assert_eq!(merge_layout_class("ui-avatar", Some("")), "ui-avatar");
        assert_eq!(merge_layout_class("ui-avatar", None), "ui-avatar");
    }
}
