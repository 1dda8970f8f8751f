//! Slide chrome for the deck
//!
//! Theme, the animated backdrop behind every slide, the footer, the
//! on-screen prev/next controls and a handful of widgets the slides are
//! built from.

pub mod backdrop;
pub mod controls;
pub mod footer;
pub mod theme;
pub mod widget_utils;
pub mod widgets;

pub use controls::Controls;
pub use footer::{Footer, FOOTER_HEIGHT};
pub use theme::{apply_theme, Theme};
pub use widget_utils::{chart_id, WidgetId};

// Glyphs available in egui's bundled emoji font
pub mod icons {
    pub const SHIELD: &str = "🛡";
    pub const ALERT: &str = "⚠";
    pub const CHART: &str = "📊";
    pub const SEARCH: &str = "🔍";
    pub const BOLT: &str = "⚡";
    pub const TARGET: &str = "🎯";
    pub const DATABASE: &str = "🗄";
    pub const LOCK: &str = "🔒";
    pub const CHECK: &str = "✔";
    pub const LAYERS: &str = "📚";
    pub const USERS: &str = "👥";
    pub const CALENDAR: &str = "📅";
}
