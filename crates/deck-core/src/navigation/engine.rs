//! Clamped slide navigation

use super::{NavigationContext, NavigationSubscriber, Transition};
use crate::input::NavAction;
use crate::{DeckError, Result};
use std::sync::{Arc, Weak};

/// Owns the current slide index and the only two transitions of the deck.
///
/// The index always satisfies `0 <= position <= total - 1`. Requests past
/// either end are clamped rather than rejected, so both ends behave as
/// reflective boundaries.
pub struct NavigationController {
    position: usize,
    total: usize,
    subscribers: Vec<Weak<dyn NavigationSubscriber>>,
}

impl NavigationController {
    /// Create a controller positioned on the first slide
    pub fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(DeckError::EmptyRegistry);
        }

        Ok(Self {
            position: 0,
            total,
            subscribers: Vec::new(),
        })
    }

    /// Current zero-based slide index
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of slides
    pub fn total(&self) -> usize {
        self.total
    }

    /// Move forward one slide, staying put on the last one
    pub fn advance(&mut self) -> Transition {
        let target = (self.position + 1).min(self.total - 1);
        self.move_to(target)
    }

    /// Move back one slide, staying put on the first one
    pub fn retreat(&mut self) -> Transition {
        let target = self.position.saturating_sub(1);
        self.move_to(target)
    }

    /// Dispatch an input action to the matching transition
    pub fn apply(&mut self, action: NavAction) -> Transition {
        match action {
            NavAction::Next => self.advance(),
            NavAction::Previous => self.retreat(),
        }
    }

    /// Get current navigation context
    pub fn context(&self) -> NavigationContext {
        NavigationContext {
            position: self.position,
            total: self.total,
        }
    }

    /// Add a subscriber; it is held weakly and dropped once its owner goes away
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn NavigationSubscriber>) {
        self.subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Number of subscribers still alive
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    fn move_to(&mut self, target: usize) -> Transition {
        if target == self.position {
            tracing::trace!(position = self.position, "navigation clamped");
            return Transition::Clamped { at: self.position };
        }

        let from = self.position;
        self.position = target;
        tracing::debug!(from, to = target, total = self.total, "slide changed");

        self.notify_subscribers();
        Transition::Moved { from, to: target }
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&mut self) {
        let context = self.context();

        // Remove any dead weak references
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in &self.subscribers {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(&context);
            }
        }
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("position", &self.position)
            .field("total", &self.total)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use proptest::prelude::*;

    const DECK_LEN: usize = 12;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<usize>>,
    }

    impl NavigationSubscriber for Recorder {
        fn on_navigation_change(&self, context: &NavigationContext) {
            self.seen.lock().push(context.position);
        }
    }

    fn controller_at(position: usize) -> NavigationController {
        let mut controller = NavigationController::new(DECK_LEN).unwrap();
        for _ in 0..position {
            controller.advance();
        }
        controller
    }

    #[test]
    fn test_starts_on_first_slide() {
        let controller = NavigationController::new(DECK_LEN).unwrap();
        assert_eq!(controller.position(), 0);
        assert_eq!(controller.total(), 12);
        assert!(controller.context().is_first());
        assert!(!controller.context().is_last());
    }

    #[test]
    fn test_zero_slides_rejected() {
        assert_eq!(NavigationController::new(0).unwrap_err(), DeckError::EmptyRegistry);
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut controller = NavigationController::new(DECK_LEN).unwrap();
        assert_eq!(controller.retreat(), Transition::Clamped { at: 0 });
        assert_eq!(controller.retreat(), Transition::Clamped { at: 0 });
        assert_eq!(controller.position(), 0);
    }

    #[test]
    fn test_advance_through_whole_deck() {
        let mut controller = NavigationController::new(DECK_LEN).unwrap();
        for _ in 0..11 {
            assert!(controller.advance().moved());
        }
        assert_eq!(controller.position(), 11);
        assert!(controller.context().is_last());

        assert_eq!(controller.advance(), Transition::Clamped { at: 11 });
        assert_eq!(controller.position(), 11);
    }

    #[test]
    fn test_retreat_twice_from_middle() {
        let mut controller = controller_at(5);
        assert_eq!(controller.retreat(), Transition::Moved { from: 5, to: 4 });
        assert_eq!(controller.retreat(), Transition::Moved { from: 4, to: 3 });
        assert_eq!(controller.position(), 3);
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let mut via_action = controller_at(4);
        let mut direct = controller_at(4);
        assert_eq!(via_action.apply(NavAction::Next), direct.advance());
        assert_eq!(via_action.apply(NavAction::Previous), direct.retreat());
        assert_eq!(via_action.position(), direct.position());
    }

    #[test]
    fn test_single_slide_deck_is_pinned() {
        let mut controller = NavigationController::new(1).unwrap();
        let context = controller.context();
        assert!(context.is_first() && context.is_last());
        assert!(!controller.advance().moved());
        assert!(!controller.retreat().moved());
    }

    #[test]
    fn test_subscribers_notified_only_on_move() {
        let recorder = Arc::new(Recorder::default());
        let mut controller = NavigationController::new(3).unwrap();
        controller.add_subscriber(recorder.clone());

        controller.retreat();
        controller.advance();
        controller.advance();
        controller.advance();
        controller.retreat();

        assert_eq!(*recorder.seen.lock(), vec![1, 2, 1]);
    }

    #[test]
    fn test_dropped_subscriber_pruned() {
        let mut controller = NavigationController::new(3).unwrap();
        {
            let recorder: Arc<dyn NavigationSubscriber> = Arc::new(Recorder::default());
            controller.add_subscriber(recorder.clone());
            assert_eq!(controller.subscriber_count(), 1);
        }
        assert_eq!(controller.subscriber_count(), 0);
        controller.advance();
        assert_eq!(controller.position(), 1);
    }

    #[test]
    fn test_context_display_position() {
        let controller = controller_at(2);
        let context = controller.context();
        assert_eq!(context.display_position(), 3);
        assert_eq!(context.total, 12);
        assert!((context.progress() - 0.25).abs() < f32::EPSILON);
    }

    fn action_strategy() -> impl Strategy<Value = NavAction> {
        prop_oneof![Just(NavAction::Next), Just(NavAction::Previous)]
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            total in 1usize..40,
            actions in proptest::collection::vec(action_strategy(), 0..200),
        ) {
            let mut controller = NavigationController::new(total).unwrap();
            for action in actions {
                let before = controller.position();
                let transition = controller.apply(action);
                prop_assert!(controller.position() < total);
                prop_assert_eq!(transition.position(), controller.position());
                prop_assert!(before.abs_diff(controller.position()) <= 1);
            }
        }
    }
}
