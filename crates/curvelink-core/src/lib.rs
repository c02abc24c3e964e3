pub mod error;
pub mod id;
pub mod tolerance;
pub mod traits;

pub use error::{ChainError, Result};
pub use id::CurveId;
pub use tolerance::Tolerance;
