//! Status item badges positioned around the avatar perimeter.

use std::collections::BTreeMap;

use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};

use super::outline::{Outline, OutlineSpec, STATUS_ITEM_OUTLINE_DEFAULTS};
use super::placement::{placement_transform, Position};
use super::text_fit::{is_text_candidate, StatusItemTextFit};
use crate::primitives::InlineStyle;
use crate::{use_reading_direction, Icon, IconName, IconSpec, Length, ReadingDirection};

/// Wrapper padding as a fraction of the avatar size.
pub const STATUS_ITEM_WRAPPER_PADDING_FACTOR: f64 = 0.06;

/// Status item text renders this much larger than the badge size.
pub const STATUS_ITEM_FONT_DIFF_PX: f64 = 2.0;

const STATUS_ITEM_BACKGROUND: &str = "var(--avatar-status-item-background)";

/// Status item descriptors keyed by perimeter position; one badge per position.
pub type StatusItems = BTreeMap<Position, StatusItemSpec>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Side of the text the status item icon sits on.
pub enum IconAlign {
    /// Icon before the text.
    Left,
    /// Icon after the text.
    #[default]
    Right,
}

impl IconAlign {
    fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Recommended `[badge size, badge padding]` in pixels for an avatar of `avatar_px`.
pub fn status_item_size_and_padding(avatar_px: f64) -> (f64, f64) {
    let size = avatar_px * 16.0 / 100.0;
    (size, size * 6.0 / 16.0)
}

#[derive(Clone, Default)]
/// One status item badge.
pub struct StatusItemSpec {
    /// Badge glyph.
    pub icon: Option<IconSpec>,
    /// Short label shown next to the icon.
    pub text: Option<String>,
    /// Longest text still rendered; defaults to three characters.
    pub text_max_length: Option<usize>,
    /// Text color.
    pub color: Option<String>,
    /// Badge size; text renders at this size plus two pixels.
    pub size: Option<Length>,
    /// Badge background.
    pub background_color: Option<String>,
    /// Badge ring; missing fields use the status item defaults.
    pub outline: Option<OutlineSpec>,
    /// Wrapper padding override.
    pub padding: Option<Length>,
    /// Extra inline CSS appended to the computed wrapper style.
    pub wrapper_style: Option<String>,
    /// Extra wrapper class.
    pub wrapper_class: Option<String>,
    /// Click handler; makes the badge a button.
    pub on_click: Option<Callback<MouseEvent>>,
    /// Accessible label.
    pub aria_label: Option<String>,
    /// Icon placement relative to the text.
    pub align_icon: IconAlign,
}

impl std::fmt::Debug for StatusItemSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusItemSpec")
            .field("icon", &self.icon)
            .field("text", &self.text)
            .field("text_max_length", &self.text_max_length)
            .field("size", &self.size)
            .field("clickable", &self.on_click.is_some())
            .field("align_icon", &self.align_icon)
            .finish_non_exhaustive()
    }
}

impl StatusItemSpec {
    /// Icon-only badge.
    pub fn icon(icon: impl Into<IconSpec>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }

    /// Sets the badge text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the badge size.
    pub fn with_size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Draws a ring around the badge.
    pub fn with_outline(mut self, outline: OutlineSpec) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, on_click: Callback<MouseEvent>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    /// Sets the accessible label.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Places the icon before the text.
    pub fn icon_first(mut self) -> Self {
        self.align_icon = IconAlign::Left;
        self
    }

    /// Whether the text passes the static length gate.
    pub fn has_text_candidate(&self) -> bool {
        is_text_candidate(self.text.as_deref(), self.text_max_length)
    }

    /// Badge size, defaulting to 16% of the avatar size.
    pub fn badge_size(&self, avatar_size: &Length) -> Length {
        self.size
            .clone()
            .unwrap_or_else(|| match avatar_size.as_px() {
                Some(avatar_px) => Length::Px(status_item_size_and_padding(avatar_px).0),
                None => avatar_size.scale(0.16),
            })
    }

    /// Text font size: badge size plus [`STATUS_ITEM_FONT_DIFF_PX`].
    pub fn text_font_size(&self, avatar_size: &Length) -> Length {
        self.badge_size(avatar_size)
            .add(&Length::Px(STATUS_ITEM_FONT_DIFF_PX))
    }

    /// Resolved badge ring, when one is requested.
    pub fn resolved_outline(&self) -> Option<Outline> {
        self.outline
            .as_ref()
            .map(|outline| outline.resolve(&STATUS_ITEM_OUTLINE_DEFAULTS))
    }
}

/// Inline style for the badge wrapper at `position`.
pub fn status_item_style(
    spec: &StatusItemSpec,
    position: Position,
    direction: ReadingDirection,
    avatar_size: &Length,
    avatar_outline: Option<&Outline>,
) -> String {
    let padding = spec
        .padding
        .clone()
        .unwrap_or_else(|| avatar_size.scale(STATUS_ITEM_WRAPPER_PADDING_FACTOR));
    let transform = placement_transform(position, direction, avatar_size, avatar_outline);

    let mut style = InlineStyle::default();
    style.push(
        "background",
        spec.background_color
            .clone()
            .unwrap_or_else(|| STATUS_ITEM_BACKGROUND.to_string()),
    );
    style.push("padding", padding.to_css());
    style.push("transform", transform.to_css());
    if let Some(outline) = spec.resolved_outline() {
        outline.write_style(&mut style);
    }
    if let Some(extra) = spec.wrapper_style.as_deref() {
        style.push_raw(extra);
    }
    style.to_css()
}

/// Inline style for the badge text.
pub fn status_item_text_style(spec: &StatusItemSpec, avatar_size: &Length) -> String {
    let mut style = InlineStyle::default();
    if let Some(color) = spec.color.as_ref() {
        style.push("color", color.clone());
    }
    style.push("font-size", spec.text_font_size(avatar_size).to_css());
    style.push("line-height", spec.badge_size(avatar_size).to_css());
    style.to_css()
}

fn status_item_class(spec: &StatusItemSpec) -> String {
    let mut class = String::from("ui-avatar-status-item");
    if let Some(extra) = spec.wrapper_class.as_deref().filter(|extra| !extra.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    if spec.on_click.is_some() {
        class.push_str(" ui-avatar-status-item-clickable");
    }
    class
}

#[component]
/// Absolutely positioned layer rendering every status item of one avatar.
pub fn StatusItemLayer(
    /// Avatar size the badges are placed around.
    size: Length,
    /// Resolved avatar ring, which pushes badges outward.
    outline: Option<Outline>,
    /// Badges keyed by position.
    #[prop(into)]
    status_items: MaybeSignal<StatusItems>,
) -> impl IntoView {
    let status_items = Signal::derive(move || status_items.get());
    let direction = use_reading_direction();
    let text_fit = StatusItemTextFit::new();
    let rendered_text_positions = create_memo(move |_| {
        status_items.with(|items| {
            items
                .iter()
                .filter(|(_, spec)| spec.has_text_candidate())
                .map(|(position, _)| *position)
                .collect::<Vec<_>>()
        })
    });
    text_fit.watch(rendered_text_positions);

    move || {
        let direction = direction.get();
        status_items
            .get()
            .into_iter()
            .map(|(position, spec)| {
                view! {
                    <StatusItemBadge
                        position
                        direction
                        spec
                        size=size.clone()
                        outline=outline.clone()
                        text_fit
                    />
                }
            })
            .collect_view()
    }
}

#[component]
fn StatusItemBadge(
    position: Position,
    direction: ReadingDirection,
    spec: StatusItemSpec,
    size: Length,
    outline: Option<Outline>,
    text_fit: StatusItemTextFit,
) -> impl IntoView {
    let style = status_item_style(&spec, position, direction, &size, outline.as_ref());
    let class = status_item_class(&spec);
    let on_click = spec.on_click.clone();
    let badge_size = spec.badge_size(&size);
    let icon = spec.icon.clone().unwrap_or_else(|| IconSpec::new(IconName::Presence));
    let icon_view = view! {
        <Icon
            icon=icon.name
            dimension=icon.size.clone().unwrap_or(badge_size)
            color=icon.color.clone().unwrap_or_default()
            layout_class="ui-avatar-status-item-icon"
        />
    }
    .into_view();
    let (leading_icon, trailing_icon) = match spec.align_icon {
        IconAlign::Left => (Some(icon_view), None),
        IconAlign::Right => (None, Some(icon_view)),
    };

    let text = spec
        .has_text_candidate()
        .then(|| spec.text.clone())
        .flatten()
        .map(|text| {
            let text_style = status_item_text_style(&spec, &size);
            let align = spec.align_icon;
            let node_ref = text_fit.node_ref(position);
            view! {
                <Show when=move || text_fit.shows_text(position) fallback=|| ()>
                    <span
                        class="ui-avatar-status-item-text"
                        node_ref=node_ref
                        style=text_style.clone()
                        data-ui-align-icon=align.token()
                        data-ui-direction=direction.token()
                    >
                        {text.clone()}
                    </span>
                </Show>
            }
        });

    view! {
        <div
            class=class
            style=style
            role=on_click.is_some().then_some("button")
            aria-label=spec.aria_label.clone()
            data-ui-primitive="true"
            data-ui-kind="avatar-status-item"
            data-ui-position=position.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon}
            {text}
            {trailing_icon}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::outline::{OutlineSpec, AVATAR_OUTLINE_DEFAULTS};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_badge_sizing_follows_avatar() {
        assert_eq!(status_item_size_and_padding(50.0), (8.0, 3.0));
        let spec = StatusItemSpec::icon(IconName::Presence);
        assert_eq!(spec.badge_size(&Length::Px(50.0)), Length::Px(8.0));
        assert_eq!(spec.text_font_size(&Length::Px(50.0)), Length::Px(10.0));
    }

    #[test]
    fn explicit_badge_size_adds_fixed_font_offset() {
        let spec = StatusItemSpec::icon(IconName::Star).with_size(12.0);
        assert_eq!(spec.text_font_size(&Length::Px(32.0)), Length::Px(14.0));
        let spec = StatusItemSpec::icon(IconName::Star).with_size(Length::Rem(1.0));
        assert_eq!(
            spec.text_font_size(&Length::Px(32.0)).to_css(),
            "calc(2px + 1rem)"
        );
    }

    #[test]
    fn wrapper_style_uses_defaults_then_overrides() {
        let spec = StatusItemSpec::icon(IconName::Presence);
        assert_eq!(
            status_item_style(
                &spec,
                Position::Right,
                ReadingDirection::Ltr,
                &Length::Px(50.0),
                None
            ),
            "background: var(--avatar-status-item-background); padding: 3px; transform: translate(25px)"
        );

        let spec = StatusItemSpec {
            padding: Some(Length::Px(1.0)),
            wrapper_style: Some("z-index: 2;".to_string()),
            ..StatusItemSpec::icon(IconName::Presence).with_background("red")
        };
        assert_eq!(
            status_item_style(
                &spec,
                Position::Right,
                ReadingDirection::Ltr,
                &Length::Px(50.0),
                None
            ),
            "background: red; padding: 1px; transform: translate(25px); z-index: 2"
        );
    }

    #[test]
    fn wrapper_style_includes_badge_ring_and_avatar_ring_radius() {
        let spec = StatusItemSpec::icon(IconName::Presence).with_outline(OutlineSpec::default());
        let avatar_ring = OutlineSpec::default().resolve(&AVATAR_OUTLINE_DEFAULTS);
        assert_eq!(
            status_item_style(
                &spec,
                Position::TopLeft,
                ReadingDirection::Rtl,
                &Length::Px(50.0),
                Some(&avatar_ring)
            ),
            "background: var(--avatar-status-item-background); padding: 3px; \
             transform: rotate(-45deg) translate(28px) rotate(45deg); \
             outline-color: var(--grey-color-80); outline-offset: 0px; outline-style: solid; outline-width: 2px"
        );
    }

    #[test]
    fn text_style_sets_color_size_and_line_height() {
        let spec = StatusItemSpec::icon(IconName::Star)
            .with_size(14.0)
            .with_color("white");
        assert_eq!(
            status_item_text_style(&spec, &Length::Px(32.0)),
            "color: white; font-size: 16px; line-height: 14px"
        );
    }

    #[test]
    fn text_gate_uses_per_item_limit() {
        let spec = StatusItemSpec::icon(IconName::Star).with_text("abc");
        assert!(spec.has_text_candidate());
        let spec = StatusItemSpec::icon(IconName::Star).with_text("abcd");
        assert!(!spec.has_text_candidate());
        let spec = StatusItemSpec {
            text_max_length: Some(5),
            ..StatusItemSpec::icon(IconName::Star).with_text("abcd")
        };
        assert!(spec.has_text_candidate());
    }

    #[test]
    fn wrapper_class_is_appended() {
        let spec = StatusItemSpec {
            wrapper_class: Some("presence".to_string()),
            ..StatusItemSpec::default()
        };
        assert_eq!(status_item_class(&spec), "ui-avatar-status-item presence");
    }
}
