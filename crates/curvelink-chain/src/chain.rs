//! Assembled chains.

use curvelink_core::traits::Validate;
use curvelink_core::{ChainError, CurveId, Result, Tolerance};
use curvelink_geometry::Curve;
use curvelink_math::{coincident, Point3};
use serde::Serialize;

use crate::record::{Chainable, CurveRecord};

/// An ordered run of records where each end meets the next start.
///
/// Only ever handed out when it consumed its whole group, so it is never empty.
#[derive(Debug, Clone, Serialize)]
pub struct Chain<T> {
    curves: Vec<T>,
    tolerance: Tolerance,
}

impl<T: Chainable> Chain<T> {
    pub(crate) fn new(curves: Vec<T>, tolerance: Tolerance) -> Self {
        debug_assert!(!curves.is_empty(), "chain must hold at least one curve");
        Self { curves, tolerance }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn records(&self) -> &[T] {
        &self.curves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.curves.iter()
    }

    pub fn into_records(self) -> Vec<T> {
        self.curves
    }

    /// Start of the first record.
    pub fn left_end(&self) -> Point3 {
        self.curves[0].start()
    }

    /// End of the last record.
    pub fn right_end(&self) -> Point3 {
        self.curves[self.curves.len() - 1].end()
    }

    /// Input positions in chain order.
    pub fn ids(&self) -> Vec<CurveId> {
        self.curves.iter().map(Chainable::id).collect()
    }

    /// Whether the chain returns to where it started.
    pub fn is_closed(&self) -> bool {
        coincident(self.right_end(), self.left_end(), self.tolerance)
    }

    /// One block per record listing its id and both endpoints.
    pub fn describe_endpoints(&self) -> String {
        self.curves
            .iter()
            .map(|c| {
                let (s, e) = (c.start(), c.end());
                format!(
                    "{}\n  ({:.6}, {:.6}, {:.6})\n  ({:.6}, {:.6}, {:.6})\n",
                    c.id(),
                    s.x,
                    s.y,
                    s.z,
                    e.x,
                    e.y,
                    e.z
                )
            })
            .collect()
    }
}

impl<C: Curve + Clone> Chain<CurveRecord<C>> {
    /// Records that had to be flipped relative to the caller's input.
    pub fn reversed_ids(&self) -> Vec<CurveId> {
        self.curves
            .iter()
            .filter(|c| c.is_reversed())
            .map(Chainable::id)
            .collect()
    }

    /// The underlying curves in chain order, already oriented.
    pub fn into_curves(self) -> Vec<C> {
        self.curves.into_iter().map(CurveRecord::into_curve).collect()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl<T: Chainable> Validate for Chain<T> {
    fn validate(&self) -> Result<()> {
        if self.curves.is_empty() {
            return Err(ChainError::Topology("Chain holds no curves".to_string()));
        }
        for pair in self.curves.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if !coincident(a.end(), b.start(), self.tolerance) {
                return Err(ChainError::Topology(format!(
                    "Curve {} ends {:.6} away from the start of curve {}",
                    a.id(),
                    a.end().distance(b.start()),
                    b.id()
                )));
            }
        }
        Ok(())
    }
}
