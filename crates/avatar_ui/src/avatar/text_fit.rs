//! Post-layout legibility check for status item text.
//!
//! Status item text is sized relative to the avatar, so its resolved font size is only known
//! once the browser has laid the badge out. After each change to the rendered badge set the
//! resolved sizes are read back and any text below [`MIN_STATUS_ITEM_FONT_SIZE_PX`] is hidden,
//! leaving an icon-only badge.

use std::collections::BTreeMap;

use leptos::*;

use super::placement::Position;

/// Smallest resolved font size, in pixels, at which status item text is shown.
pub const MIN_STATUS_ITEM_FONT_SIZE_PX: f64 = 12.0;

/// Longest status item text rendered when no per-item limit is configured.
pub const DEFAULT_STATUS_ITEM_MAX_TEXT_LENGTH: usize = 3;

/// Static gate: `text` is non-empty and at most `max_length` characters
/// (default [`DEFAULT_STATUS_ITEM_MAX_TEXT_LENGTH`]).
pub fn is_text_candidate(text: Option<&str>, max_length: Option<usize>) -> bool {
    let max_length = max_length.unwrap_or(DEFAULT_STATUS_ITEM_MAX_TEXT_LENGTH);
    text.is_some_and(|text| !text.is_empty() && text.chars().count() <= max_length)
}

/// Dynamic gate: a resolved font size is legible at or above the minimum.
pub fn is_legible(resolved_px: f64) -> bool {
    resolved_px >= MIN_STATUS_ITEM_FONT_SIZE_PX
}

/// Parses a computed `font-size` such as `"11.5px"`, truncating toward zero.
pub fn parse_resolved_font_size(value: &str) -> Option<f64> {
    let number = value.trim().strip_suffix("px")?.trim();
    let parsed = number.parse::<f64>().ok()?;
    parsed.is_finite().then(|| parsed.trunc())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Per-position record of whether status item text is legible.
///
/// Positions without a measurement show their text.
pub struct VisibilityMap {
    entries: BTreeMap<Position, bool>,
}

impl VisibilityMap {
    /// Whether text at `position` should render.
    pub fn shows_text(&self, position: Position) -> bool {
        self.entries.get(&position).copied().unwrap_or(true)
    }

    /// Whether `position` has been measured.
    pub fn is_measured(&self, position: Position) -> bool {
        self.entries.contains_key(&position)
    }

    /// Records a legibility result. Returns `true` when the entry changed.
    pub fn record(&mut self, position: Position, legible: bool) -> bool {
        self.entries.insert(position, legible) != Some(legible)
    }

    /// Forgets measurements for positions no longer rendered.
    pub fn retain_positions(&mut self, positions: &[Position]) -> bool {
        let before = self.entries.len();
        self.entries.retain(|position, _| positions.contains(position));
        before != self.entries.len()
    }

    /// Applies one measurement pass of computed `font-size` strings.
    ///
    /// Unparseable values leave the existing entry untouched. Returns `true` when any entry
    /// changed.
    pub fn apply_measurements<'a>(
        &mut self,
        measurements: impl IntoIterator<Item = (Position, &'a str)>,
    ) -> bool {
        let mut changed = false;
        for (position, font_size) in measurements {
            match parse_resolved_font_size(font_size) {
                Some(resolved) => changed |= self.record(position, is_legible(resolved)),
                None => logging::warn!(
                    "status item {} font size `{font_size}` is not a pixel value",
                    position.token()
                ),
            }
        }
        changed
    }
}

/// Settles one measurement pass against `current`.
///
/// Positions missing from `rendered` are forgotten before the readings apply, so a badge that
/// left and came back starts shown. Rendered positions without a reading keep their entry.
/// Returns the next map only when it differs from `current`.
pub fn settle_visibility<'a>(
    current: &VisibilityMap,
    rendered: &[Position],
    measurements: impl IntoIterator<Item = (Position, &'a str)>,
) -> Option<VisibilityMap> {
    let mut next = current.clone();
    let pruned = next.retain_positions(rendered);
    let updated = next.apply_measurements(measurements);
    (pruned || updated).then_some(next)
}

#[derive(Clone, Copy)]
/// Text-fit state owned by one status item layer.
pub(crate) struct StatusItemTextFit {
    text_refs: StoredValue<BTreeMap<Position, NodeRef<html::Span>>>,
    visibility: RwSignal<VisibilityMap>,
}

impl StatusItemTextFit {
    pub(crate) fn new() -> Self {
        let text_refs = Position::ALL
            .into_iter()
            .map(|position| (position, create_node_ref::<html::Span>()))
            .collect();
        Self {
            text_refs: store_value(text_refs),
            visibility: create_rw_signal(VisibilityMap::default()),
        }
    }

    pub(crate) fn node_ref(&self, position: Position) -> NodeRef<html::Span> {
        self.text_refs
            .with_value(|refs| refs.get(&position).copied())
            .unwrap_or_default()
    }

    pub(crate) fn shows_text(&self, position: Position) -> bool {
        self.visibility.with(|map| map.shows_text(position))
    }

    /// Re-measures whenever the rendered position set changes, one frame after layout.
    pub(crate) fn watch(self, positions: Memo<Vec<Position>>) {
        create_effect(move |_| {
            let positions = positions.get();
            request_animation_frame(move || self.measure(&positions));
        });
    }

    fn measure(&self, positions: &[Position]) {
        let window = window();
        let mut measured = Vec::with_capacity(positions.len());
        for position in positions {
            let Some(element) = self.node_ref(*position).get_untracked() else {
                continue;
            };
            if !element.is_connected() {
                continue;
            }
            let element: &web_sys::Element = &element;
            match window.get_computed_style(element) {
                Ok(Some(computed)) => match computed.get_property_value("font-size") {
                    Ok(font_size) => measured.push((*position, font_size)),
                    Err(err) => logging::warn!("status item font size lookup failed: {err:?}"),
                },
                Ok(None) => {}
                Err(err) => logging::warn!("status item computed style failed: {err:?}"),
            }
        }

        let next = self.visibility.with_untracked(|current| {
            settle_visibility(
                current,
                positions,
                measured
                    .iter()
                    .map(|(position, font_size)| (*position, font_size.as_str())),
            )
        });
        if let Some(next) = next {
            self.visibility.set(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_length_gate_defaults_to_three() {
        assert!(is_text_candidate(Some("99+"), None));
        assert!(!is_text_candidate(Some("100+"), None));
        assert!(is_text_candidate(Some("100+"), Some(4)));
        assert!(!is_text_candidate(Some(""), None));
        assert!(!is_text_candidate(None, None));
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        assert!(is_text_candidate(Some("äöü"), None));
    }

    #[test]
    fn legibility_boundary_is_inclusive() {
        assert!(!is_legible(11.0));
        assert!(is_legible(12.0));
        assert!(is_legible(18.0));
    }

    #[test]
    fn parses_computed_font_sizes() {
        assert_eq!(parse_resolved_font_size("12px"), Some(12.0));
        assert_eq!(parse_resolved_font_size(" 11.9px "), Some(11.0));
        assert_eq!(parse_resolved_font_size("1em"), None);
        assert_eq!(parse_resolved_font_size(""), None);
    }

    #[test]
    fn unmeasured_positions_show_text() {
        let map = VisibilityMap::default();
        for position in Position::ALL {
            assert!(map.shows_text(position));
            assert!(!map.is_measured(position));
        }
    }

    #[test]
    fn one_pass_settles_every_position() {
        let mut map = VisibilityMap::default();
        let changed = map.apply_measurements([
            (Position::Top, "11.5px"),
            (Position::Bottom, "12px"),
            (Position::Left, "14px"),
        ]);
        assert!(changed);
        assert!(!map.shows_text(Position::Top));
        assert!(map.shows_text(Position::Bottom));
        assert!(map.shows_text(Position::Left));
        assert!(map.shows_text(Position::Right));
        assert!(!map.is_measured(Position::Right));
    }

    #[test]
    fn repeated_pass_is_idempotent() {
        let mut map = VisibilityMap::default();
        map.apply_measurements([(Position::Top, "10px")]);
        let snapshot = map.clone();
        assert!(!map.apply_measurements([(Position::Top, "10px")]));
        assert_eq!(map, snapshot);
    }

    #[test]
    fn unparseable_measurement_keeps_previous_entry() {
        let mut map = VisibilityMap::default();
        map.apply_measurements([(Position::Top, "10px")]);
        assert!(!map.apply_measurements([(Position::Top, "normal")]));
        assert!(!map.shows_text(Position::Top));
    }

    #[test]
    fn pass_forgets_removed_positions_before_applying_readings() {
        let mut current = VisibilityMap::default();
        current.apply_measurements([(Position::Top, "10px"), (Position::Left, "10px")]);

        let next = settle_visibility(&current, &[Position::Left], [(Position::Left, "14px")])
            .expect("pass changes the map");
        assert!(next.shows_text(Position::Top));
        assert!(!next.is_measured(Position::Top));
        assert!(next.shows_text(Position::Left));
        assert!(next.is_measured(Position::Left));
    }

    #[test]
    fn pass_removing_only_a_position_still_reports_change() {
        let mut current = VisibilityMap::default();
        current.apply_measurements([(Position::Top, "14px"), (Position::Left, "14px")]);

        let next = settle_visibility(&current, &[Position::Left], [(Position::Left, "14px")])
            .expect("pruning alone changes the map");
        assert!(!next.is_measured(Position::Top));
    }

    #[test]
    fn hidden_text_stays_hidden_when_its_span_is_absent() {
        let mut current = VisibilityMap::default();
        current.apply_measurements([(Position::Top, "10px")]);

        let no_readings: Vec<(Position, &str)> = Vec::new();
        assert_eq!(settle_visibility(&current, &[Position::Top], no_readings), None);
        assert!(!current.shows_text(Position::Top));
    }

    #[test]
    fn unchanged_pass_yields_no_update() {
        let mut current = VisibilityMap::default();
        current.apply_measurements([(Position::Bottom, "12px")]);
        assert_eq!(
            settle_visibility(&current, &[Position::Bottom], [(Position::Bottom, "12.4px")]),
            None
        );
    }

    #[test]
    fn removed_positions_are_forgotten() {
        let mut map = VisibilityMap::default();
        map.apply_measurements([(Position::Top, "10px"), (Position::Left, "10px")]);
        assert!(map.retain_positions(&[Position::Left]));
        assert!(map.shows_text(Position::Top));
        assert!(!map.shows_text(Position::Left));
    }
}
