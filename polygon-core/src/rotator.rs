//! Rotator - successive orderings of the rotating ring
//!
//! Level 3 - Steps
//!
//! Each step moves the last team to the front. Combined with folding the
//! ordering in half (see [`crate::round`]), one full period of `k` rotations
//! pairs every two teams of the ring exactly once.

use std::iter::FusedIterator;

/// Next ordering: the last element moves to the front.
///
/// Returns a new vector; the input ordering is left untouched.
pub fn rotate<T: Clone>(ordering: &[T]) -> Vec<T> {
    let mut next = ordering.to_vec();
    if !next.is_empty() {
        next.rotate_right(1);
    }
    next
}

/// Infinite stream of orderings, starting with the original one.
///
/// The stream is periodic: item `i` equals item `i + k` for a ring of `k`
/// teams.
#[derive(Clone, Debug)]
pub struct Rotator<T> {
    current: Vec<T>,
}

impl<T: Clone> Rotator<T> {
    pub fn new(ordering: &[T]) -> Self {
        Self {
            current: ordering.to_vec(),
        }
    }

    /// Number of teams in the ring (the rotation period)
    pub fn period(&self) -> usize {
        self.current.len()
    }
}

impl<T: Clone> Iterator for Rotator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let next = rotate(&self.current);
        Some(std::mem::replace(&mut self.current, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone> FusedIterator for Rotator<T> {}
