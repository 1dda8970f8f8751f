//! Deck settings

use crate::input::KeyBindings;
use serde::{Serialize, Deserialize};

/// Presentation-wide settings, built in code at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSettings {
    /// Native window settings
    pub window: WindowSettings,

    /// Duration of the fade/scale transition between slides, in seconds
    pub transition_secs: f32,

    /// Hide the on-screen prev/next controls until hovered
    pub autohide_controls: bool,

    /// Footer caption shown bottom-left
    pub footer_caption: String,

    /// Suffix shown after the current year in the footer
    pub footer_suffix: String,

    /// Keyboard bindings for navigation
    pub key_bindings: KeyBindings,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            transition_secs: 0.6,
            autohide_controls: true,
            footer_caption: "Confidential // EPITA SCIA".to_string(),
            footer_suffix: "Security Audit".to_string(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "CIC-IIoT-2025 Security Analysis".to_string(),
            inner_size: [1280.0, 800.0],
            min_inner_size: [960.0, 640.0],
        }
    }
}

impl DeckSettings {
    /// Render the settings as JSON for start-up logging
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NavAction;

    #[test]
    fn test_defaults() {
        let settings = DeckSettings::default();
        assert!((settings.transition_secs - 0.6).abs() < f32::EPSILON);
        assert!(settings.autohide_controls);
        assert_eq!(
            settings.key_bindings.action_for(egui::Key::Space),
            Some(NavAction::Next)
        );
    }

    #[test]
    fn test_json_round_trip_keeps_bindings() {
        let settings = DeckSettings::default();
        let json = settings.to_json().unwrap();
        let parsed: DeckSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
