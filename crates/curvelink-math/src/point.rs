use curvelink_core::Tolerance;

use crate::Point3;

/// Whether two points are the same vertex under `tol`.
///
/// Uses the Euclidean distance and a strict comparison, so points exactly
/// `tol.linear` apart are treated as distinct.
pub fn coincident(a: Point3, b: Point3, tol: Tolerance) -> bool {
    tol.is_zero(a.distance(b))
}
