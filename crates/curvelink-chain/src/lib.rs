//! curvelink chaining: reorder and reverse curves into continuous chains.

pub mod assembler;
pub mod builder;
pub mod chain;
pub mod pool;
pub mod record;

pub use assembler::{AssemblerConfig, ChainSetAssembler, SetOutcome};
pub use builder::{build_chain, ChainBuilder};
pub use chain::Chain;
pub use pool::Pool;
pub use record::{Chainable, CurveRecord};
