use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{
    ACTIVE_SECTION_PROBE_PX, BACK_TO_TOP_THRESHOLD_PX, SCROLLED_THRESHOLD_PX, SECTIONS,
};
use crate::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: u32,
    pub is_past_threshold: bool,
    pub is_past_back_to_top_threshold: bool,
}

impl ScrollState {
    /// Negative offsets (overscroll bounce) clamp to zero.
    pub fn from_offset(raw: f64) -> Self {
        let offset = if raw.is_finite() { raw.max(0.0).round() as u32 } else { 0 };
        Self {
            offset,
            is_past_threshold: offset > SCROLLED_THRESHOLD_PX,
            is_past_back_to_top_threshold: offset > BACK_TO_TOP_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

/// Picks the section under `offset + probe`. Sections are scanned in
/// document order; if ranges overlap the later one wins.
pub fn active_section(offset: u32, sections: &[SectionBounds]) -> Option<&'static str> {
    let position = offset as f64 + ACTIVE_SECTION_PROBE_PX;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id)
}

/// Everything the page chrome derives from the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiState {
    pub scroll: ScrollState,
    pub active_section: Option<&'static str>,
}

impl UiState {
    pub fn project(raw_offset: f64, sections: &[SectionBounds]) -> Self {
        let scroll = ScrollState::from_offset(raw_offset);
        Self {
            scroll,
            active_section: active_section(scroll.offset, sections),
        }
    }
}

fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|(id, _)| *id).collect()
}

fn current_ui_state(ids: &[&'static str]) -> Option<UiState> {
    let offset = dom::scroll_offset().ok()?;
    let sections = dom::measure_sections(ids).ok()?;
    Some(UiState::project(offset, &sections))
}

/// Recomputes [`UiState`] on every window scroll event. Only re-renders
/// the caller when the projection actually changes.
#[hook]
pub fn use_ui_state() -> UiState {
    let state = use_state_eq(UiState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let ids = section_ids();
                dom::report_missing_ids(&ids);

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(next) = current_ui_state(&ids) {
                        state.set(next);
                    }
                }) as Box<dyn FnMut()>);

                let window = dom::window().ok();
                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("{}", crate::error::SiteError::dom("scroll listener", e));
                    }
                    // Initial check, the page may load already scrolled.
                    if let Err(e) = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&JsValue::NULL)
                    {
                        log::warn!("{}", crate::error::SiteError::dom("initial scroll check", e));
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home", top: 0.0, height: 800.0 },
            SectionBounds { id: "products", top: 800.0, height: 1200.0 },
            SectionBounds { id: "about", top: 2000.0, height: 600.0 },
            SectionBounds { id: "contact", top: 3000.0, height: 700.0 },
        ]
    }

    #[test]
    fn thresholds_are_strictly_greater_than() {
        for offset in [0u32, 1, 49, 50, 51, 499, 500, 501, 5000] {
            let state = ScrollState::from_offset(offset as f64);
            assert_eq!(state.offset, offset);
            assert_eq!(state.is_past_threshold, offset > 50, "offset {}", offset);
            assert_eq!(state.is_past_back_to_top_threshold, offset > 500, "offset {}", offset);
        }
    }

    #[test]
    fn negative_and_fractional_offsets_are_normalized() {
        assert_eq!(ScrollState::from_offset(-40.0).offset, 0);
        assert_eq!(ScrollState::from_offset(50.4).offset, 50);
        assert!(!ScrollState::from_offset(50.4).is_past_threshold);
        assert_eq!(ScrollState::from_offset(f64::NAN).offset, 0);
    }

    #[test]
    fn active_section_uses_probe_below_viewport_top() {
        let sections = layout();
        assert_eq!(active_section(0, &sections), Some("home"));
        assert_eq!(active_section(699, &sections), Some("home"));
        assert_eq!(active_section(700, &sections), Some("products"));
        assert_eq!(active_section(1899, &sections), Some("products"));
        assert_eq!(active_section(1900, &sections), Some("about"));
    }

    #[test]
    fn gap_between_sections_has_no_active_link() {
        let sections = layout();
        // probe at 2700..3000 falls between about and contact
        assert_eq!(active_section(2600, &sections), None);
        assert_eq!(active_section(2899, &sections), None);
        assert_eq!(active_section(2900, &sections), Some("contact"));
        assert_eq!(active_section(10_000, &sections), None);
    }

    #[test]
    fn at_most_one_section_matches_any_offset() {
        let sections = layout();
        for offset in (0..4000).step_by(7) {
            let position = offset as f64 + ACTIVE_SECTION_PROBE_PX;
            let matches = sections.iter().filter(|s| s.contains(position)).count();
            assert!(matches <= 1);
            assert_eq!(active_section(offset, &sections).is_some(), matches == 1);
        }
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![
            SectionBounds { id: "a", top: 0.0, height: 1000.0 },
            SectionBounds { id: "b", top: 500.0, height: 1000.0 },
        ];
        assert_eq!(active_section(500, &sections), Some("b"));
    }

    #[test]
    fn projection_combines_flags_and_section() {
        let state = UiState::project(750.0, &layout());
        assert!(state.scroll.is_past_threshold);
        assert!(state.scroll.is_past_back_to_top_threshold);
        assert_eq!(state.active_section, Some("products"));

        assert_eq!(UiState::project(0.0, &[]), UiState {
            scroll: ScrollState::default(),
            active_section: None,
        });
    }
}
