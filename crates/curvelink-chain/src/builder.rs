//! Greedy endpoint matching that grows one chain from a seed curve.
//!
//! The chain first grows at its right end until no remaining record touches
//! it, then at its left end. Within a pass the pool is scanned in ascending
//! input order and the first record touching the open end wins, even when
//! later records would touch it too.

use std::collections::VecDeque;

use curvelink_core::{CurveId, Result, Tolerance};
use curvelink_math::{coincident, Point3};
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::pool::Pool;
use crate::record::Chainable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// A partially grown chain with cached open ends.
#[derive(Debug, Clone)]
pub struct ChainBuilder<T> {
    curves: VecDeque<T>,
    left_end: Point3,
    right_end: Point3,
    tolerance: Tolerance,
}

impl<T: Chainable> ChainBuilder<T> {
    pub fn new(seed: T, tolerance: Tolerance) -> Self {
        let left_end = seed.start();
        let right_end = seed.end();
        let mut curves = VecDeque::new();
        curves.push_back(seed);
        Self {
            curves,
            left_end,
            right_end,
            tolerance,
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn left_end(&self) -> Point3 {
        self.left_end
    }

    pub fn right_end(&self) -> Point3 {
        self.right_end
    }

    /// Find the first pool record touching the right end.
    ///
    /// A record whose end touches is reversed inside the pool before its id is
    /// returned, so the caller always takes out a correctly oriented record.
    pub fn check_forward(&self, pool: &mut Pool<T>) -> Option<CurveId> {
        let (id, flip) = pool.iter().find_map(|(id, c)| {
            if coincident(c.start(), self.right_end, self.tolerance) {
                Some((id, false))
            } else if coincident(c.end(), self.right_end, self.tolerance) {
                Some((id, true))
            } else {
                None
            }
        })?;
        if flip {
            trace!(curve = %id, "reversing to extend right end");
            pool.reverse(id);
        }
        Some(id)
    }

    /// Find the first pool record touching the left end, reversing it in the
    /// pool when its start is the touching end.
    pub fn check_backward(&self, pool: &mut Pool<T>) -> Option<CurveId> {
        let (id, flip) = pool.iter().find_map(|(id, c)| {
            if coincident(c.start(), self.left_end, self.tolerance) {
                Some((id, true))
            } else if coincident(c.end(), self.left_end, self.tolerance) {
                Some((id, false))
            } else {
                None
            }
        })?;
        if flip {
            trace!(curve = %id, "reversing to extend left end");
            pool.reverse(id);
        }
        Some(id)
    }

    /// Append at the right end. The caller guarantees adjacency (see [`Self::check_forward`]).
    pub fn connect_forward(&mut self, curve: T) {
        self.right_end = curve.end();
        self.curves.push_back(curve);
    }

    /// Prepend at the left end. The caller guarantees adjacency (see [`Self::check_backward`]).
    pub fn connect_backward(&mut self, curve: T) {
        self.left_end = curve.start();
        self.curves.push_front(curve);
    }

    /// Grow at the right end until no pool record fits. Returns how many were added.
    pub fn extend_forward(&mut self, pool: &mut Pool<T>) -> usize {
        self.extend(pool, Direction::Forward)
    }

    /// Grow at the left end until no pool record fits. Returns how many were added.
    pub fn extend_backward(&mut self, pool: &mut Pool<T>) -> usize {
        self.extend(pool, Direction::Backward)
    }

    fn extend(&mut self, pool: &mut Pool<T>, direction: Direction) -> usize {
        // Each pass removes one record, so the pool size bounds the passes.
        let passes = pool.len();
        let mut added = 0;
        for _ in 0..passes {
            let found = match direction {
                Direction::Forward => self.check_forward(pool),
                Direction::Backward => self.check_backward(pool),
            };
            let Some(curve) = found.and_then(|id| pool.remove(id)) else {
                break;
            };
            trace!(curve = %curve.id(), ?direction, "connected");
            match direction {
                Direction::Forward => self.connect_forward(curve),
                Direction::Backward => self.connect_backward(curve),
            }
            added += 1;
        }
        added
    }

    pub fn finish(self) -> Chain<T> {
        Chain::new(self.curves.into(), self.tolerance)
    }
}

/// Chain every record of one group, seeded with the first.
///
/// Returns `Ok(None)` when the records do not form a single chain (or there are
/// none); a partial chain is never returned.
pub fn build_chain<T: Chainable>(
    records: Vec<T>,
    tolerance: Tolerance,
) -> Result<Option<Chain<T>>> {
    let total = records.len();
    let mut records = records.into_iter();
    let Some(seed) = records.next() else {
        debug!("empty group cannot be chained");
        return Ok(None);
    };

    let mut pool = Pool::new(records, total)?;
    let mut builder = ChainBuilder::new(seed, tolerance);
    let forward = builder.extend_forward(&mut pool);
    let backward = builder.extend_backward(&mut pool);

    if builder.len() != total {
        debug!(
            total,
            forward,
            backward,
            left_over = pool.len(),
            "curves do not form a single chain"
        );
        return Ok(None);
    }
    trace!(total, forward, backward, "chain complete");
    Ok(Some(builder.finish()))
}
