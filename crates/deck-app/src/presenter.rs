//! Deck state: which slide is up, how we got there, and when it arrived

use crate::slides::Slide;
use deck_core::{
    BindingGuard, DeckSettings, InputRouter, KeyboardSource, NavAction, NavigationContext,
    NavigationController, NavigationSubscriber, SlideRegistry, Transition,
};
use deck_views::animation::{lerp, Easing, SlideClock, Tween};
use egui::InputState;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Longest entrance any slide plays after it is entered
const SETTLE_SECS: f32 = 4.0;

/// Asks egui for a fresh frame whenever the slide changes
pub struct RepaintSubscriber {
    ctx: egui::Context,
}

impl RepaintSubscriber {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl NavigationSubscriber for RepaintSubscriber {
    fn on_navigation_change(&self, context: &NavigationContext) {
        debug!(position = context.position, "repaint on slide change");
        self.ctx.request_repaint();
    }
}

/// Owns the registry, the navigation controller and the input bindings
pub struct Presenter {
    registry: SlideRegistry<Slide>,
    navigation: NavigationController,
    router: InputRouter,
    _keyboard: BindingGuard,
    _repaint: Option<Arc<RepaintSubscriber>>,
    clock: SlideClock,
    transition: Tween,
    settings: DeckSettings,
}

impl Presenter {
    /// Build the deck on its first slide, with the clock started at `now`
    pub fn new(settings: DeckSettings, now: f64) -> deck_core::Result<Self> {
        let registry = SlideRegistry::new(Slide::ALL.to_vec())?;
        let navigation = NavigationController::new(registry.len())?;

        let mut router = InputRouter::new();
        let keyboard = router.attach(Box::new(KeyboardSource::new(settings.key_bindings.clone())));
        let transition = Tween::new(settings.transition_secs).eased(Easing::SLIDE);

        info!(
            next = ?settings.key_bindings.keys_for(NavAction::Next),
            previous = ?settings.key_bindings.keys_for(NavAction::Previous),
            "keyboard bound"
        );
        info!(slides = registry.len(), "deck ready");
        Ok(Self {
            registry,
            navigation,
            router,
            _keyboard: keyboard,
            _repaint: None,
            clock: SlideClock::new(now),
            transition,
            settings,
        })
    }

    /// Repaint `ctx` on every slide change
    pub fn with_repaint(mut self, ctx: &egui::Context) -> Self {
        let subscriber = Arc::new(RepaintSubscriber::new(ctx.clone()));
        self.navigation.add_subscriber(subscriber.clone());
        self._repaint = Some(subscriber);
        debug!(
            subscribers = self.navigation.subscriber_count(),
            "repaint on slide change"
        );
        self
    }

    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    pub fn clock(&self) -> &SlideClock {
        &self.clock
    }

    pub fn context(&self) -> NavigationContext {
        self.navigation.context()
    }

    /// Slide on screen
    pub fn current_slide(&self) -> Slide {
        match self.registry.try_get(self.navigation.position()) {
            Ok(slide) => *slide,
            Err(e) => {
                error!(%e, "slide registry out of step with navigation");
                Slide::Title
            }
        }
    }

    /// Advance the slide clock to the frame time
    pub fn tick(&mut self, now: f64) {
        self.clock.tick(now);
    }

    /// Apply one navigation action; a real move restarts the slide clock
    pub fn handle(&mut self, action: NavAction) -> Transition {
        let transition = self.navigation.apply(action);
        if transition.moved() {
            self.clock.reenter();
            debug!(
                action = action.label(),
                slide = self.current_slide().title(),
                "presenting"
            );
        }
        transition
    }

    /// Actions the attached input sources report for this frame.
    ///
    /// Kept apart from [`Self::handle`]: a move requests a repaint, which must
    /// not happen while egui's input lock is held.
    pub fn pending_actions(&self, input: &InputState) -> Vec<NavAction> {
        self.router.collect(input)
    }

    /// Opacity and scale of the slide entering the screen
    pub fn entrance(&self) -> (f32, f32) {
        let progress = self.transition.progress(self.clock.elapsed());
        (progress.clamp(0.0, 1.0), lerp(0.95, 1.0, progress))
    }

    /// Whether the current slide is still playing its entrance
    pub fn is_settling(&self) -> bool {
        !Tween::new(SETTLE_SECS).is_finished(self.clock.elapsed())
    }
}
