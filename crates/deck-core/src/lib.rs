//! Core functionality for the slide deck
//! 
//! This crate provides the slide registry, the clamped navigation controller
//! and the input routing that drives it.

pub mod error;
pub mod input;
pub mod navigation;
pub mod registry;
pub mod settings;

// Re-export commonly used types
pub use error::DeckError;
pub use input::{BindingGuard, InputRouter, InputSource, KeyBindings, KeyboardSource, NavAction};
pub use navigation::{
    NavigationController, NavigationContext, NavigationSubscriber, Transition,
};
pub use registry::SlideRegistry;
pub use settings::{DeckSettings, WindowSettings};

/// Convenience alias used across the deck crates
pub type Result<T> = std::result::Result<T, DeckError>;
