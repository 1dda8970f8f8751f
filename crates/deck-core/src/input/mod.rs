//! Input binding for slide navigation
//!
//! Keyboard and pointer input both funnel into the same two [`NavAction`]s.
//! Sources are attached to an [`InputRouter`] and stay active for as long as
//! the returned [`BindingGuard`] is alive.

use serde::{Serialize, Deserialize};

mod bindings;
mod router;

pub use bindings::{KeyBindings, KeyboardSource};
pub use router::{BindingGuard, InputRouter, InputSource};

/// The two logical navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavAction {
    /// Go to the next slide
    Next,
    /// Go to the previous slide
    Previous,
}

impl NavAction {
    /// Short label used in logs and tooltips
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Next => "next",
            NavAction::Previous => "previous",
        }
    }
}
