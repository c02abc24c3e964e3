//! Curve records: the endpoint view of a curve that the chaining core works on.

use curvelink_core::{ChainError, CurveId, Result};
use curvelink_geometry::{Curve, CurveEnd};
use curvelink_math::Point3;
use serde::{Deserialize, Serialize};

/// Anything with an id, two endpoints, and a way to flip direction.
pub trait Chainable: Clone {
    fn id(&self) -> CurveId;

    fn start(&self) -> Point3;

    fn end(&self) -> Point3;

    /// A copy with start and end swapped and the same id. Must not touch `self`.
    fn reversed(&self) -> Self;
}

/// A bound curve together with its cached endpoints and input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord<C> {
    id: CurveId,
    start: Point3,
    end: Point3,
    reversed: bool,
    curve: C,
}

impl<C: Curve + Clone> CurveRecord<C> {
    /// Wrap a curve taken from position `id` of the input.
    ///
    /// Fails with [`ChainError::UnboundCurve`] when the curve has no endpoints.
    pub fn from_curve(id: CurveId, curve: C) -> Result<Self> {
        let (Some(start), Some(end)) = (
            curve.end_point(CurveEnd::Start),
            curve.end_point(CurveEnd::End),
        ) else {
            return Err(ChainError::UnboundCurve { id });
        };
        Ok(Self {
            id,
            start,
            end,
            reversed: false,
            curve,
        })
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn into_curve(self) -> C {
        self.curve
    }

    /// Whether this record runs opposite to the curve the caller supplied.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

impl<C: Curve + Clone> Chainable for CurveRecord<C> {
    fn id(&self) -> CurveId {
        self.id
    }

    fn start(&self) -> Point3 {
        self.start
    }

    fn end(&self) -> Point3 {
        self.end
    }

    fn reversed(&self) -> Self {
        Self {
            id: self.id,
            start: self.end,
            end: self.start,
            reversed: !self.reversed,
            curve: self.curve.reversed(),
        }
    }
}
