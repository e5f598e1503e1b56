use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::{ANIMATABLE_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom::{self, IntersectionWatch};
use crate::error::{Result, SiteError};

const KEY_ATTR: &str = "data-reveal";

/// Elements that have been on screen at least once. Never shrinks.
#[derive(Debug, Default)]
pub struct VisibilitySet {
    seen: HashSet<u32>,
}

impl VisibilitySet {
    /// Returns true only the first time `key` is marked.
    pub fn mark_visible(&mut self, key: u32) -> bool {
        self.seen.insert(key)
    }

    #[cfg(test)]
    pub fn is_visible(&self, key: u32) -> bool {
        self.seen.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

/// Key stamped on an animatable element; unkeyed elements are never hidden.
fn reveal_key(attr: Option<String>) -> Option<u32> {
    attr?.parse().ok()
}

fn start_watch() -> Result<IntersectionWatch> {
    let targets = dom::query_all(ANIMATABLE_SELECTOR)?;
    for (key, element) in targets.iter().enumerate() {
        // Without a key the element could never be revealed, so leave it unhidden.
        if let Err(e) = element.set_attribute(KEY_ATTR, &key.to_string()) {
            log::warn!("{}", SiteError::dom("set_attribute(data-reveal)", e));
            continue;
        }
        dom::add_class(element, "fade-in")?;
    }
    log::info!("watching {} animatable elements", targets.len());

    let seen = Rc::new(RefCell::new(VisibilitySet::default()));
    IntersectionWatch::new(
        &targets,
        REVEAL_THRESHOLD,
        REVEAL_ROOT_MARGIN,
        move |element, _| {
            let Some(key) = reveal_key(element.get_attribute(KEY_ATTR)) else {
                return;
            };
            let mut seen = seen.borrow_mut();
            if seen.mark_visible(key) {
                if let Err(e) = dom::add_class(element, "visible") {
                    log::warn!("{}", e);
                }
                log::debug!("revealed element {} ({} so far)", key, seen.len());
            }
        },
    )
}

/// Fades animatable elements in the first time they scroll into view.
/// The observer stays attached for the lifetime of the calling component.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let watch = match start_watch() {
                Ok(watch) => Some(watch),
                Err(e) => {
                    log::warn!("scroll animations disabled: {}", e);
                    None
                }
            };
            move || drop(watch)
        },
        (),
    );
}

/// Becomes true the first time the element with `anchor_id` is at least
/// `threshold` visible, then stops watching it.
#[hook]
pub fn use_seen_once(anchor_id: &'static str, threshold: f64) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let watch = dom::element_by_id(anchor_id).and_then(|element| {
                    IntersectionWatch::new(&[element], threshold, REVEAL_ROOT_MARGIN, move |el, observer| {
                        observer.unobserve(el);
                        seen.set(true);
                    })
                });
                if let Err(e) = &watch {
                    log::warn!("{}", e);
                }
                move || drop(watch)
            },
            (),
        );
    }

    *seen
}
