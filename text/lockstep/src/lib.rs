//! Shortest-wins parallel iteration over any number of sources.
//!
//! [`lockstep`] advances N iterators together, yielding one row of
//! corresponding elements per step and stopping the first time any
//! single source runs out — no partial row is ever produced. Zero
//! sources yield an empty sequence immediately.
//!
//! The iterator is lazy and single-pass: work happens only when a row
//! is pulled, and dropping it releases the underlying iterators.

use std::iter::FusedIterator;

/// Iterates over several sources in parallel, producing a row with one
/// element from each, in source order.
///
/// Stops at the shortest source, like the Python builtin `zip`.
///
/// # Example
///
/// ```
/// let rows: Vec<_> = lockstep::lockstep([vec![1, 2, 3], vec![4, 5]]).collect();
/// assert_eq!(rows, [vec![1, 4], vec![2, 5]]);
/// ```
pub fn lockstep<C>(sources: C) -> Lockstep<<C::Item as IntoIterator>::IntoIter>
where
    C: IntoIterator,
    C::Item: IntoIterator,
{
    Lockstep {
        iters: sources.into_iter().map(IntoIterator::into_iter).collect(),
        done: false,
    }
}

/// Explicit state-holding iterator behind [`lockstep`].
///
/// Holds one iterator per source plus a `done` flag. The flag makes the
/// iterator fused: once any source is exhausted, later `next()` calls
/// return `None` without poking the remaining iterators again.
#[derive(Clone, Debug)]
pub struct Lockstep<I> {
    iters: Vec<I>,
    done: bool,
}

impl<I: Iterator> Iterator for Lockstep<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.iters.is_empty() {
            self.done = true;
            return None;
        }

        // One element from every source, in order. `collect` into
        // `Option<Vec<_>>` short-circuits on the first exhausted source.
        let row: Option<Vec<I::Item>> = self.iters.iter_mut().map(Iterator::next).collect();
        if row.is_none() {
            self.done = true;
        }
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.iters.is_empty() {
            return (0, Some(0));
        }

        // Shortest source wins, so combine by taking minima.
        let mut lower = usize::MAX;
        let mut upper: Option<usize> = None;
        for iter in &self.iters {
            let (lo, hi) = iter.size_hint();
            lower = lower.min(lo);
            upper = match (upper, hi) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        (lower, upper)
    }
}

impl<I: Iterator> FusedIterator for Lockstep<I> {}
