use crate::error::Result;

/// Validate structural integrity of an assembled entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
