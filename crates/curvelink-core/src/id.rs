/// Position of a curve in the caller's input sequence.
///
/// Assigned once when a group is turned into records and never reassigned, so a
/// reversed record still carries the id of the curve it came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CurveId(usize);

impl CurveId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for CurveId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
