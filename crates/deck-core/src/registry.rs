//! Fixed, ordered registry of slides

use crate::{DeckError, Result};

/// Immutable ordered list of slides.
///
/// Built once at start-up and read-only afterwards. Order is presentation
/// order; a slide is identified only by its position.
#[derive(Debug, Clone)]
pub struct SlideRegistry<S> {
    slides: Vec<S>,
}

impl<S> SlideRegistry<S> {
    /// Build a registry, rejecting an empty slide list
    pub fn new(slides: Vec<S>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyRegistry);
        }
        Ok(Self { slides })
    }

    /// Number of slides (always at least one)
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the final slide
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// Get the slide at a position
    pub fn get(&self, index: usize) -> Option<&S> {
        self.slides.get(index)
    }

    /// Get the slide at a position, reporting misses as an error
    pub fn try_get(&self, index: usize) -> Result<&S> {
        self.slides.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.slides.len(),
        })
    }

    /// Iterate slides in presentation order
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_rejected() {
        let result = SlideRegistry::<u8>::new(Vec::new());
        assert_eq!(result.unwrap_err(), DeckError::EmptyRegistry);
    }

    #[test]
    fn test_order_preserved() {
        let registry = SlideRegistry::new(vec!["title", "agenda", "end"]).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.last_index(), 2);
        assert_eq!(registry.iter().copied().collect::<Vec<_>>(), vec!["title", "agenda", "end"]);
        assert_eq!(registry.get(1), Some(&"agenda"));
    }

    #[test]
    fn test_lookup_past_end() {
        let registry = SlideRegistry::new(vec![1, 2]).unwrap();
        assert!(registry.get(2).is_none());
        assert_eq!(
            registry.try_get(5).unwrap_err(),
            DeckError::IndexOutOfRange { index: 5, len: 2 }
        );
    }
}
