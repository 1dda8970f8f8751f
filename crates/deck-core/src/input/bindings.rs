use super::{InputSource, NavAction};
use egui::{Event, InputState, Key};
use serde::{Serialize, Deserialize};

/// Key-to-action table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    entries: Vec<(Key, NavAction)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(Key::ArrowRight, NavAction::Next)
            // Generic "forward" alias
            .bind(Key::Space, NavAction::Next)
            .bind(Key::ArrowLeft, NavAction::Previous)
    }
}

impl KeyBindings {
    /// A table with no bindings
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Bind a key, replacing any previous binding for it
    pub fn bind(mut self, key: Key, action: NavAction) -> Self {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, action));
        self
    }

    /// Action bound to a key, if any
    pub fn action_for(&self, key: Key) -> Option<NavAction> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, action)| *action)
    }

    /// Keys bound to an action, in binding order
    pub fn keys_for(&self, action: NavAction) -> Vec<Key> {
        self.entries
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    /// All bound keys
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Translate key-press events into actions, preserving event order
    pub fn actions_for_events(&self, events: &[Event]) -> Vec<NavAction> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Key { key, pressed: true, .. } => self.action_for(*key),
                _ => None,
            })
            .collect()
    }
}

/// Keyboard input source driven by a [`KeyBindings`] table
#[derive(Debug, Clone, Default)]
pub struct KeyboardSource {
    bindings: KeyBindings,
}

impl KeyboardSource {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl InputSource for KeyboardSource {
    fn name(&self) -> &str {
        "keyboard"
    }

    fn poll(&mut self, input: &InputState) -> Vec<NavAction> {
        self.bindings.actions_for_events(&input.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(Key::ArrowRight), Some(NavAction::Next));
        assert_eq!(bindings.action_for(Key::Space), Some(NavAction::Next));
        assert_eq!(bindings.action_for(Key::ArrowLeft), Some(NavAction::Previous));
        assert_eq!(bindings.action_for(Key::ArrowUp), None);
    }

    #[test]
    fn test_forward_aliases() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.keys_for(NavAction::Next), vec![Key::ArrowRight, Key::Space]);
        assert_eq!(bindings.keys_for(NavAction::Previous), vec![Key::ArrowLeft]);
    }

    #[test]
    fn test_rebind_replaces() {
        let bindings = KeyBindings::default().bind(Key::Space, NavAction::Previous);
        assert_eq!(bindings.action_for(Key::Space), Some(NavAction::Previous));
        assert_eq!(bindings.keys().count(), 3);
    }

    #[test]
    fn test_non_key_events_ignored() {
        let bindings = KeyBindings::default();
        let events = vec![Event::Text(" ".to_string()), Event::PointerGone];
        assert!(bindings.actions_for_events(&events).is_empty());
    }

    #[test]
    fn test_keyboard_source_without_events() {
        let mut source = KeyboardSource::default();
        assert!(source.poll(&InputState::default()).is_empty());
        assert!(KeyBindings::empty().action_for(Key::ArrowRight).is_none());
    }
}
