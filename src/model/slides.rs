//! Fixed, non-empty slide collection.

use super::error::CarouselError;

/// Ordered sequence of slide handles, fixed at engine construction.
///
/// There is no insertion or removal. The collection is guaranteed non-empty,
/// which lets the engine keep `current_index` in `[0, len - 1]` without
/// a special empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCollection<T> {
    slides: Vec<T>,
}

impl<T> SlideCollection<T> {
    /// Smart constructor: rejects an empty sequence.
    pub fn new(slides: Vec<T>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptySlideCollection);
        }
        Ok(Self { slides })
    }

    /// Number of slides (always at least one).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the final slide.
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// True when `index` names a slide in this collection.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.slides.len()
    }

    /// Slide at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slides.get(index)
    }

    /// Iterate slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slides.iter()
    }
}

impl<'a, T> IntoIterator for &'a SlideCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
