use super::NavAction;
use egui::InputState;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Anything that turns raw frame input into navigation actions
pub trait InputSource: Send {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Actions produced by this frame's input
    fn poll(&mut self, input: &InputState) -> Vec<NavAction>;
}

type SourceMap = BTreeMap<u64, Box<dyn InputSource>>;

/// Registry of attached input sources.
///
/// Clones are handles onto the same set of sources.
#[derive(Clone)]
pub struct InputRouter {
    sources: Arc<Mutex<SourceMap>>,
    next_id: Arc<AtomicU64>,
}

/// Keeps an input source attached; dropping it detaches the source
#[must_use = "the binding is released as soon as the guard is dropped"]
pub struct BindingGuard {
    id: u64,
    name: String,
    sources: Weak<Mutex<SourceMap>>,
}

impl InputRouter {
    /// Create a router with nothing attached
    pub fn new() -> Self {
        Self {
            sources: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Attach a source until the returned guard is dropped
    pub fn attach(&mut self, source: Box<dyn InputSource>) -> BindingGuard {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let name = source.name().to_string();
        tracing::debug!(binding = %name, id, "input binding attached");
        self.sources.lock().insert(id, source);

        BindingGuard {
            id,
            name,
            sources: Arc::downgrade(&self.sources),
        }
    }

    /// Poll every live source in attachment order
    pub fn collect(&self, input: &InputState) -> Vec<NavAction> {
        let mut sources = self.sources.lock();
        sources
            .values_mut()
            .flat_map(|source| source.poll(input))
            .collect()
    }

    /// Number of sources currently attached
    pub fn active_bindings(&self) -> usize {
        self.sources.lock().len()
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingGuard {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        if let Some(sources) = self.sources.upgrade() {
            sources.lock().remove(&self.id);
            tracing::debug!(binding = %self.name, id = self.id, "input binding released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emits a fixed script of actions once
    struct Scripted {
        actions: Vec<NavAction>,
    }

    impl InputSource for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn poll(&mut self, _input: &InputState) -> Vec<NavAction> {
            std::mem::take(&mut self.actions)
        }
    }

    fn scripted(actions: &[NavAction]) -> Box<dyn InputSource> {
        Box::new(Scripted { actions: actions.to_vec() })
    }

    #[test]
    fn test_collect_in_attachment_order() {
        let mut router = InputRouter::new();
        let _first = router.attach(scripted(&[NavAction::Next]));
        let _second = router.attach(scripted(&[NavAction::Previous, NavAction::Next]));

        let input = InputState::default();
        assert_eq!(
            router.collect(&input),
            vec![NavAction::Next, NavAction::Previous, NavAction::Next]
        );
        assert!(router.collect(&input).is_empty());
    }

    #[test]
    fn test_guard_drop_detaches() {
        let mut router = InputRouter::new();
        let guard = router.attach(scripted(&[NavAction::Next]));
        assert_eq!(router.active_bindings(), 1);
        assert_eq!(guard.name(), "scripted");

        drop(guard);
        assert_eq!(router.active_bindings(), 0);
        assert!(router.collect(&InputState::default()).is_empty());
    }

    #[test]
    fn test_clones_share_sources() {
        let mut router = InputRouter::new();
        let mut handle = router.clone();
        let first = router.attach(scripted(&[NavAction::Next]));
        let _second = handle.attach(scripted(&[NavAction::Previous]));
        assert_eq!(router.active_bindings(), 2);

        drop(first);
        assert_eq!(handle.active_bindings(), 1);
        assert_eq!(router.collect(&InputState::default()), vec![NavAction::Previous]);
    }

    #[test]
    fn test_guard_outliving_router() {
        let mut router = InputRouter::new();
        let guard = router.attach(scripted(&[]));
        drop(router);
        // Nothing left to detach from; dropping must still be clean
        drop(guard);
    }

    #[test]
    fn test_released_on_unwind() {
        let mut router = InputRouter::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = router.attach(scripted(&[NavAction::Next]));
            panic!("view torn down mid-frame");
        }));
        assert!(result.is_err());
        assert_eq!(router.active_bindings(), 0);
    }
}
