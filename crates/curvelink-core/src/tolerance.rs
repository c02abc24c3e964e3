/// Tolerances used when comparing geometry produced by the host kernel.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    pub linear: f64,
    /// Angular tolerance (in radians)
    pub angular: f64,
}

impl Tolerance {
    /// Distance below which two curve endpoints are the same vertex.
    pub const VERTEX: f64 = 0.0005;
    pub const ANGULAR: f64 = 0.0015;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    /// The vertex tolerance used for endpoint matching.
    pub fn vertex() -> Self {
        Self {
            linear: Self::VERTEX,
            angular: Self::ANGULAR,
        }
    }

    /// Same angular tolerance, different linear one.
    pub fn with_linear(self, linear: f64) -> Self {
        Self { linear, ..self }
    }

    /// Check if two values are equal within linear tolerance.
    ///
    /// The comparison is strict: values exactly `linear` apart are distinct.
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a non-negative distance is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if two angles are equal within angular tolerance
    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::vertex()
    }
}
