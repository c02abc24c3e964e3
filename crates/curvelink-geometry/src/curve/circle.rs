//! Circular arc curve.

use std::f64::consts::PI;

use curvelink_core::Result;
use curvelink_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{check_bounds, Curve};

/// A circular arc in 3D space, or a full circle when unbound.
///
/// `point_at(t) = center + radius * (cos(t) * x_axis + sin(t) * (normal x x_axis))`.
/// Reversing flips the normal, which mirrors the parameterization to `-t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point3,
    pub normal: Vector3,
    pub x_axis: Vector3,
    pub radius: f64,
    pub bounds: Option<(f64, f64)>,
}

impl Arc {
    /// An unbound full circle.
    pub fn circle(center: Point3, normal: Vector3, radius: f64) -> Self {
        let normal = normal.normalize();
        Self {
            center,
            normal,
            x_axis: reference_axis(normal),
            radius,
            bounds: None,
        }
    }

    /// An arc from `start_angle` to `end_angle` (radians).
    pub fn new(
        center: Point3,
        normal: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        let mut arc = Self::circle(center, normal, radius);
        arc.make_bound(start_angle, end_angle)?;
        Ok(arc)
    }

    fn y_axis(&self) -> DVec3 {
        self.normal.cross(self.x_axis).normalize()
    }
}

/// Pick a unit vector perpendicular to `n` to serve as the `t = 0` direction.
fn reference_axis(n: DVec3) -> DVec3 {
    let ref_vec = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    n.cross(ref_vec).normalize()
}

impl Curve for Arc {
    fn point_at(&self, t: f64) -> Point3 {
        self.center + self.radius * (t.cos() * self.x_axis + t.sin() * self.y_axis())
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    fn make_bound(&mut self, start: f64, end: f64) -> Result<()> {
        check_bounds(start, end)?;
        self.bounds = Some((start, end));
        Ok(())
    }

    fn reversed(&self) -> Self {
        Self {
            normal: -self.normal,
            bounds: self.bounds.map(|(a, b)| (-b, -a)),
            ..self.clone()
        }
    }

    fn is_closed(&self) -> bool {
        self.bounds.is_none()
    }

    fn period(&self) -> Option<f64> {
        Some(2.0 * PI)
    }
}
