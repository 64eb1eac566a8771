//! Alternator - infinite alternating boolean sequence
//!
//! Level 4 - Utilities
//!
//! A flip value of `true` swaps the naturally computed `(t1, t2)` order of a
//! pairing into `(t2, t1)`. Every call site owns its own sequence, so there is
//! no coupling between rounds, phases or generators.

use std::iter::FusedIterator;

/// Produces `seed, !seed, seed, !seed, ...` forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alternator {
    next: bool,
}

impl Alternator {
    /// Create a sequence whose first value is `seed`
    pub fn new(seed: bool) -> Self {
        Self { next: seed }
    }

    /// Return the current value and step to its negation.
    pub fn advance(&mut self) -> bool {
        let value = self.next;
        self.next = !value;
        value
    }

    /// The value the next call to [`advance`](Self::advance) returns
    pub fn peek(&self) -> bool {
        self.next
    }
}

/// Shorthand for [`Alternator::new`]
pub fn alternating(seed: bool) -> Alternator {
    Alternator::new(seed)
}

impl Iterator for Alternator {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        Some(self.advance())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        if n % 2 == 1 {
            self.next = !self.next;
        }
        self.next()
    }
}

impl FusedIterator for Alternator {}
