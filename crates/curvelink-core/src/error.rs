use thiserror::Error;

use crate::id::CurveId;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Curve {id} is unbound and cannot be chained")]
    UnboundCurve { id: CurveId },

    #[error("Invalid parameter bounds: [{start}, {end}]")]
    InvalidBounds { start: f64, end: f64 },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Topology error: {0}")]
    Topology(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;
