use log::Level;

/// Navbar gets the `scrolled` class past this offset.
pub const SCROLLED_THRESHOLD_PX: u32 = 50;
pub const BACK_TO_TOP_THRESHOLD_PX: u32 = 500;
/// Distance below the viewport top used to pick the active section.
pub const ACTIVE_SECTION_PROBE_PX: f64 = 100.0;
/// Height of the fixed header that smooth scrolling keeps clear of.
pub const HEADER_OFFSET_PX: f64 = 70.0;

pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const TOAST_DISPLAY_MS: u32 = 4000;
pub const TOAST_EXIT_MS: u32 = 300;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const HERO_STATS_THRESHOLD: f64 = 0.5;

/// Page sections in document order, as (id, nav label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("products", "Products"),
    ("about", "About"),
    ("catalogue", "Catalogue"),
    ("contact", "Contact"),
];

pub const ANIMATABLE_SELECTOR: &str =
    ".product-card, .feature-item, .catalogue-card, .info-card, .about-content, .image-card";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
