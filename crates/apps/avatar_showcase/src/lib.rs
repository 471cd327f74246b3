//! Avatar showcase app for reviewing every avatar variant and status item placement.
//!
//! The gallery renders through `avatar_ui` primitives only, so placement, theming, and
//! text-fit behavior can be reviewed in both reading directions without app-local styling.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use avatar_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MIN_GALLERY_SIZE_PX: u16 = 24;
const MAX_GALLERY_SIZE_PX: u16 = 160;
const VARIANT_SIZE_PROPERTY: &str = "--avatar-showcase-size";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct AvatarShowcaseState {
    direction: ReadingDirection,
    size_px: u16,
    shape: AvatarShape,
    show_tooltips: bool,
    randomise_theme: bool,
}

impl Default for AvatarShowcaseState {
    fn default() -> Self {
        Self {
            direction: ReadingDirection::Ltr,
            size_px: 64,
            shape: AvatarShape::Round,
            show_tooltips: true,
            randomise_theme: false,
        }
    }
}

impl AvatarShowcaseState {
    fn normalize(&mut self) {
        self.size_px = self.size_px.clamp(MIN_GALLERY_SIZE_PX, MAX_GALLERY_SIZE_PX);
    }

    fn restore(value: Value) -> Option<Self> {
        match serde_json::from_value::<Self>(value) {
            Ok(mut restored) => {
                restored.normalize();
                Some(restored)
            }
            Err(err) => {
                logging::warn!("avatar showcase restore failed: {err}");
                None
            }
        }
    }

    fn toggled_direction(&self) -> ReadingDirection {
        match self.direction {
            ReadingDirection::Ltr => ReadingDirection::Rtl,
            ReadingDirection::Rtl => ReadingDirection::Ltr,
        }
    }
}

fn variant_size_style(size_px: u16) -> String {
    format!("{VARIANT_SIZE_PROPERTY}: {size_px}px")
}

fn position_label(position: Position) -> &'static str {
    match position {
        Position::TopLeft => "Top left",
        Position::Top => "Top",
        Position::TopRight => "Top right",
        Position::Right => "Right",
        Position::BottomRight => "Bottom right",
        Position::Bottom => "Bottom",
        Position::BottomLeft => "Bottom left",
        Position::Left => "Left",
    }
}

fn single_status_item(position: Position) -> StatusItems {
    let mut items = StatusItems::new();
    items.insert(
        position,
        StatusItemSpec::icon(IconName::Presence)
            .with_color("var(--green-color-60)")
            .with_aria_label(position_label(position)),
    );
    items
}

fn presence_status_items() -> StatusItems {
    let mut items = StatusItems::new();
    items.insert(
        Position::BottomRight,
        StatusItemSpec::icon(IconName::Presence).with_color("var(--green-color-60)"),
    );
    items.insert(
        Position::TopRight,
        StatusItemSpec::icon(IconName::Star)
            .with_text("99+")
            .with_outline(OutlineSpec::default()),
    );
    items.insert(
        Position::TopLeft,
        StatusItemSpec::icon(IconName::Mic)
            .with_text("on")
            .icon_first(),
    );
    items
}

fn initials_hash(initials: &'static str) -> Callback<(), f64> {
    Callback::new(move |_| initials.chars().map(|c| f64::from(u32::from(c))).sum())
}

#[component]
/// Avatar showcase app window contents.
pub fn AvatarShowcaseApp(
    /// Manager-restored app state payload.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the serialized state whenever a control changes it.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(AvatarShowcaseState::default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    if let Some(restored) = restored_state.and_then(AvatarShowcaseState::restore) {
        last_saved.set(serde_json::to_string(&restored).ok());
        state.set(restored);
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("avatar showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_state_change.call(value),
                Err(err) => logging::warn!("avatar showcase persist failed: {err}"),
            }
        }
    });

    provide_reading_direction(Signal::derive(move || state.get().direction));

    let size_px = create_memo(move |_| state.with(|value| value.size_px));
    let shape = create_memo(move |_| state.with(|value| value.shape));
    let show_tooltips = create_memo(move |_| state.with(|value| value.show_tooltips));
    let randomise_theme = create_memo(move |_| state.with(|value| value.randomise_theme));

    let placement_gallery = move || {
        let size = Length::Px(f64::from(size_px.get()));
        let shape = shape.get();
        let show_tooltips = show_tooltips.get();
        Position::ALL
            .into_iter()
            .map(|position| {
                let tooltip = show_tooltips.then(|| {
                    TooltipConfig::new(position_label(position)).placement(TooltipPlacement::Bottom)
                });
                let avatar = view! {
                    <Avatar
                        size=size.clone()
                        shape
                        icon=IconSpec::new(IconName::Person)
                        status_items=single_status_item(position)
                        aria_label=position_label(position)
                    />
                }
                .into_view();
                view! {
                    <figure class="ui-showcase-cell" data-ui-position=position.token()>
                        {wrap_with(tooltip, avatar, |config, child| {
                            view! { <Tooltip config>{child}</Tooltip> }.into_view()
                        })}
                        <figcaption>{position_label(position)}</figcaption>
                    </figure>
                }
            })
            .collect_view()
    };

    // Variant avatars size through a custom property so resizing never rebuilds them.
    let variant_size = || Length::Expr(format!("var({VARIANT_SIZE_PROPERTY})"));

    let variant_gallery = move || {
        let shape = shape.get();
        view! {
            <figure class="ui-showcase-cell">
                <Avatar
                    src="https://avatars.githubusercontent.com/u/9919?s=128"
                    alt="Image avatar"
                    size=variant_size()
                    shape
                    outline=OutlineSpec::default()
                    status_items=presence_status_items()
                />
                <figcaption>"Image"</figcaption>
            </figure>
            <figure class="ui-showcase-cell">
                <Avatar
                    size=variant_size()
                    shape
                    icon=IconSpec::new(IconName::Person).with_color("var(--grey-color-80)")
                    outline=OutlineSpec::default().style(OutlineStyle::Dashed).width(2)
                    status_items=presence_status_items()
                />
                <figcaption>"Icon"</figcaption>
            </figure>
            <figure class="ui-showcase-cell">
                <Avatar size=variant_size() shape theme=AvatarTheme::Violet>
                    "GH"
                </Avatar>
                <figcaption>"Themed fallback"</figcaption>
            </figure>
        }
    };

    // Keyed on the random toggle alone: the rolled theme holds across every other control.
    let seeded_fallback = move || {
        let randomise_theme = randomise_theme.get();
        let shape = shape.get_untracked();
        view! {
            <figure class="ui-showcase-cell">
                <Avatar
                    size=variant_size()
                    shape
                    hashing_function=initials_hash("AL")
                    randomise_theme
                    status_items=presence_status_items()
                    tooltip=TooltipConfig::new("Ada Lovelace")
                >
                    "AL"
                </Avatar>
                <figcaption>
                    {if randomise_theme { "Random fallback" } else { "Seeded fallback" }}
                </figcaption>
            </figure>
        }
    };

    view! {
        <div
            class="ui-showcase"
            dir=move || state.get().direction.token()
            data-ui-primitive="true"
            data-ui-kind="avatar-showcase"
        >
            <header class="ui-showcase-controls">
                <button
                    type="button"
                    on:click=move |_| {
                        state.update(|value| value.direction = value.toggled_direction());
                    }
                >
                    {move || format!("Direction: {}", state.get().direction.token())}
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        state.update(|value| {
                            value.shape = match value.shape {
                                AvatarShape::Square => AvatarShape::Round,
                                AvatarShape::Round => AvatarShape::Square,
                            };
                        });
                    }
                >
                    {move || format!("Shape: {}", state.get().shape.token())}
                </button>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || state.get().show_tooltips
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|value| value.show_tooltips = checked);
                        }
                    />
                    "Tooltips"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || state.get().randomise_theme
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|value| value.randomise_theme = checked);
                        }
                    />
                    "Random theme"
                </label>
                <input
                    type="range"
                    min=MIN_GALLERY_SIZE_PX.to_string()
                    max=MAX_GALLERY_SIZE_PX.to_string()
                    aria-label="Avatar size"
                    prop:value=move || state.get().size_px.to_string()
                    on:input=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse::<u16>() {
                            state.update(|value| {
                                value.size_px = parsed;
                                value.normalize();
                            });
                        }
                    }
                />
            </header>
            <section class="ui-showcase-grid" aria-label="Status item positions">
                {placement_gallery}
            </section>
            <section
                class="ui-showcase-grid"
                aria-label="Avatar variants"
                style=move || variant_size_style(size_px.get())
            >
                {variant_gallery}
                {seeded_fallback}
            </section>
        </div>
    }
}
