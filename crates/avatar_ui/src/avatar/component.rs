use leptos::*;
use serde::{Deserialize, Serialize};

use super::outline::{Outline, OutlineSpec, AVATAR_OUTLINE_DEFAULTS};
use super::status_items::{StatusItemLayer, StatusItems};
use super::theme::{random_unit, resolve_theme_index, AvatarTheme};
use crate::primitives::{merge_layout_class, wrap_with, InlineStyle, Tooltip, TooltipConfig};
use crate::{Icon, IconSpec, Length};

/// Avatar size when none is given.
pub const DEFAULT_AVATAR_SIZE_PX: f64 = 32.0;

/// Avatar font size when none is given; also the icon variant's glyph size.
pub const DEFAULT_AVATAR_FONT_SIZE_PX: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Avatar corner treatment.
pub enum AvatarShape {
    /// Rounded-square avatar.
    #[default]
    Square,
    /// Circular avatar.
    Round,
}

impl AvatarShape {
    /// Stable token used for `data-ui-shape` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Round => "round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendering path chosen for an avatar.
pub enum AvatarVariant {
    /// Image fills the container.
    Image,
    /// Icon centered in the container.
    Icon,
    /// Themed container around child content such as initials.
    Fallback,
}

impl AvatarVariant {
    /// Picks the variant: a non-empty image source wins over an icon, which wins over the
    /// fallback.
    pub fn select(src: Option<&str>, icon: Option<&IconSpec>) -> Self {
        AvatarContent::new(src.map(str::to_owned), icon.cloned()).variant()
    }

    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Icon => "icon",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Selected variant together with the input that chose it.
enum AvatarContent {
    Image(String),
    Icon(IconSpec),
    Fallback,
}

impl AvatarContent {
    fn new(src: Option<String>, icon: Option<IconSpec>) -> Self {
        match (src.filter(|src| !src.trim().is_empty()), icon) {
            (Some(src), _) => Self::Image(src),
            (None, Some(icon)) => Self::Icon(icon),
            (None, None) => Self::Fallback,
        }
    }

    fn variant(&self) -> AvatarVariant {
        match self {
            Self::Image(_) => AvatarVariant::Image,
            Self::Icon(_) => AvatarVariant::Icon,
            Self::Fallback => AvatarVariant::Fallback,
        }
    }
}

/// Inline style for the avatar container.
///
/// Caller style follows the sizing declarations; the positioning context for status items and
/// the avatar ring come last.
pub fn avatar_container_style(
    size: &Length,
    font_size: &Length,
    extra_style: Option<&str>,
    has_status_items: bool,
    outline: Option<&Outline>,
) -> String {
    let size_css = size.to_css();
    let mut style = InlineStyle::default();
    style.push("width", size_css.clone());
    style.push("height", size_css.clone());
    style.push("min-width", size_css.clone());
    style.push("min-height", size_css);
    style.push("font-size", font_size.to_css());
    if let Some(extra) = extra_style {
        style.push_raw(extra);
    }
    if has_status_items {
        style.push("position", "relative");
    }
    if let Some(outline) = outline {
        outline.write_style(&mut style);
    }
    style.to_css()
}

/// Class list for a fallback avatar: the explicit theme and the seeded theme apply independently.
pub fn fallback_avatar_class(
    layout_class: Option<&'static str>,
    theme: Option<AvatarTheme>,
    seeded_theme: Option<AvatarTheme>,
) -> String {
    let mut class = merge_layout_class("ui-avatar", layout_class);
    for theme in [theme, seeded_theme].into_iter().flatten() {
        class.push(' ');
        class.push_str(&theme.class());
    }
    class
}

#[component]
/// Profile avatar showing an image, an icon, or themed fallback content, with optional status
/// items around its perimeter and an optional tooltip.
pub fn Avatar(
    /// Image source; selects the image variant when non-empty.
    #[prop(optional, into)]
    src: Option<String>,
    /// Image alternative text.
    #[prop(optional, into)]
    alt: Option<String>,
    /// Avatar width and height.
    #[prop(into, default = Length::Px(DEFAULT_AVATAR_SIZE_PX))]
    size: Length,
    /// Corner treatment.
    #[prop(default = AvatarShape::Square)]
    shape: AvatarShape,
    /// Extra inline CSS for the container.
    #[prop(optional, into)]
    style: Option<String>,
    /// Container font size, used by fallback text and the icon glyph.
    #[prop(into, default = Length::Px(DEFAULT_AVATAR_FONT_SIZE_PX))]
    font_size: Length,
    /// Icon descriptor; selects the icon variant when no image is given.
    #[prop(optional)]
    icon: Option<IconSpec>,
    /// Avatar ring; missing fields use the accent ring defaults.
    #[prop(optional)]
    outline: Option<OutlineSpec>,
    /// Status item badges keyed by position.
    #[prop(optional, into)]
    status_items: MaybeSignal<StatusItems>,
    /// Seed function choosing the fallback theme.
    #[prop(optional, into)]
    hashing_function: Option<Callback<(), f64>>,
    /// Explicit fallback theme.
    #[prop(optional)]
    theme: Option<AvatarTheme>,
    /// Picks a random fallback theme once per instance.
    #[prop(optional)]
    randomise_theme: bool,
    /// Tooltip shown around the avatar.
    #[prop(optional)]
    tooltip: Option<TooltipConfig>,
    /// Extra container class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Accessible label for the container.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Fallback content such as initials.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let content = AvatarContent::new(src, icon);
    let variant = content.variant();
    let outline = outline.map(|outline| outline.resolve(&AVATAR_OUTLINE_DEFAULTS));
    let status_items = Signal::derive(move || status_items.get());
    let has_status_items = Signal::derive(move || status_items.with(|items| !items.is_empty()));

    let container_style = {
        let size = size.clone();
        let font_size = font_size.clone();
        let container_outline = match variant {
            AvatarVariant::Image => None,
            AvatarVariant::Icon | AvatarVariant::Fallback => outline.clone(),
        };
        move || {
            avatar_container_style(
                &size,
                &font_size,
                style.as_deref(),
                has_status_items.get(),
                container_outline.as_ref(),
            )
        }
    };
    let status_layer = view! {
        <StatusItemLayer size=size.clone() outline=outline.clone() status_items />
    };

    let rendered = match content {
        AvatarContent::Image(src) => {
            let image_style = outline.as_ref().map(Outline::to_css);
            let dimension = size.as_px().map(|px| px.to_string());
            view! {
                <div
                    class=merge_layout_class("ui-avatar", layout_class)
                    style=container_style
                    aria-label=aria_label
                    data-ui-primitive="true"
                    data-ui-kind="avatar"
                    data-ui-variant=variant.token()
                    data-ui-shape=shape.token()
                    class:ui-avatar-round=shape == AvatarShape::Round
                >
                    <img
                        class="ui-avatar-image"
                        class:ui-avatar-round=shape == AvatarShape::Round
                        data-ui-shape=shape.token()
                        src=src
                        alt=alt
                        width=dimension.clone()
                        height=dimension
                        style=image_style
                    />
                    {status_layer}
                </div>
            }
            .into_view()
        }
        AvatarContent::Icon(icon) => {
            view! {
                <div
                    class=merge_layout_class("ui-avatar", layout_class)
                    style=container_style
                    aria-label=aria_label
                    data-ui-primitive="true"
                    data-ui-kind="avatar"
                    data-ui-variant=variant.token()
                    data-ui-shape=shape.token()
                    class:ui-avatar-round=shape == AvatarShape::Round
                >
                    <Icon
                        icon=icon.name
                        dimension=icon.size.clone().unwrap_or_else(|| font_size.clone())
                        color=icon.color.clone().unwrap_or_default()
                        layout_class="ui-avatar-icon"
                    />
                    {children.map(|children| children())}
                    {status_layer}
                </div>
            }
            .into_view()
        }
        AvatarContent::Fallback => {
            let hash = hashing_function.map(|hash| move || hash.call(()));
            let seeded_theme = resolve_theme_index(
                randomise_theme,
                hash.as_ref().map(|hash| hash as &dyn Fn() -> f64),
                random_unit,
            )
            .and_then(AvatarTheme::from_index);
            view! {
                <div
                    class=fallback_avatar_class(layout_class, theme, seeded_theme)
                    style=container_style
                    aria-label=aria_label
                    data-ui-primitive="true"
                    data-ui-kind="avatar"
                    data-ui-variant=variant.token()
                    data-ui-shape=shape.token()
                    class:ui-avatar-round=shape == AvatarShape::Round
                >
                    {children.map(|children| children())}
                    {status_layer}
                </div>
            }
            .into_view()
        }
    };

    wrap_with(tooltip, rendered, |config, child| {
        view! { <Tooltip config>{child}</Tooltip> }.into_view()
    })
}
