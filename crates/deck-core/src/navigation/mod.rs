use serde::{Serialize, Deserialize};

mod engine;
mod subscriber;

pub use engine::NavigationController;
pub use subscriber::NavigationSubscriber;

/// Snapshot of the navigation state passed to observers and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// Zero-based index of the slide on screen
    pub position: usize,
    /// Number of slides in the deck
    pub total: usize,
}

impl NavigationContext {
    /// One-based position for display ("Slide 3 / 12")
    pub fn display_position(&self) -> usize {
        self.position + 1
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.total
    }

    /// Fraction of the deck that has been shown, in `(0, 1]`
    pub fn progress(&self) -> f32 {
        self.display_position() as f32 / self.total as f32
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The position changed
    Moved { from: usize, to: usize },
    /// The request hit a boundary and the position stayed put
    Clamped { at: usize },
}

impl Transition {
    /// Position after the request
    pub fn position(&self) -> usize {
        match self {
            Transition::Moved { to, .. } => *to,
            Transition::Clamped { at } => *at,
        }
    }

    /// Whether the position changed
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}
