//! Thin wrappers over web-sys lookups. Everything here returns
//! `SiteError` instead of panicking so callers can log and move on.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::HEADER_OFFSET_PX;
use crate::error::{Result, SiteError};
use crate::scroll::SectionBounds;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::missing("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::missing("document"))
}

pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::missing(format!("#{}", id)))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|e| SiteError::dom("query_selector_all", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    element
        .class_list()
        .add_1(class)
        .map_err(|e| SiteError::dom("class_list.add", e))
}

/// `"#about"` -> `Some("about")`. Bare `"#"` and non-fragment hrefs yield `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document position to scroll to so an element whose top sits at
/// `viewport_top` ends up just below the fixed header.
pub fn scroll_target(viewport_top: f64, page_offset: f64) -> f64 {
    viewport_top + page_offset - HEADER_OFFSET_PX
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_fragment(href: &str) -> Result<()> {
    let id = fragment_id(href).ok_or_else(|| SiteError::missing(href))?;
    let target = element_by_id(id)?;
    let window = window()?;
    let page_offset = window
        .page_y_offset()
        .map_err(|e| SiteError::dom("page_y_offset", e))?;
    let top = scroll_target(target.get_bounding_client_rect().top(), page_offset);
    smooth_scroll(&window, top);
    Ok(())
}

pub fn scroll_to_top() -> Result<()> {
    smooth_scroll(&window()?, 0.0);
    Ok(())
}

pub fn scroll_offset() -> Result<f64> {
    window()?
        .scroll_y()
        .map_err(|e| SiteError::dom("scroll_y", e))
}

/// Inserts `<style id=..>` into the head unless one with that id exists.
/// Returns whether a block was inserted.
pub fn ensure_style_block(id: &str, css: &str) -> Result<bool> {
    let document = document()?;
    if document.get_element_by_id(id).is_some() {
        return Ok(false);
    }
    let head = document.head().ok_or_else(|| SiteError::missing("head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| SiteError::dom("create_element(style)", e))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| SiteError::dom("head.append_child", e))?;
    Ok(true)
}

/// Measures the given section ids in order. Sections not in the DOM are skipped.
pub fn measure_sections(ids: &[&'static str]) -> Result<Vec<SectionBounds>> {
    let document = document()?;
    Ok(ids
        .iter()
        .filter_map(|id| {
            let section = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: *id,
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            })
        })
        .collect())
}

/// Warns once for every expected anchor id absent from the page.
pub fn report_missing_ids(ids: &[&str]) {
    for id in ids {
        if let Err(err) = element_by_id(id) {
            log::warn!("{}", err);
        }
    }
}

/// A live IntersectionObserver. Dropping it disconnects the observer and
/// releases the JS callback.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    /// Observes `targets` and calls `on_enter` for each entry that is
    /// intersecting at `threshold`.
    pub fn new<F>(
        targets: &[Element],
        threshold: f64,
        root_margin: &str,
        mut on_enter: F,
    ) -> Result<Self>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(&entry.target(), &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SiteError::dom("IntersectionObserver::new", e))?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
