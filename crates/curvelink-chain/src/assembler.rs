//! Chaining over several independent groups (for example the boundary loops of a face).

use curvelink_core::{CurveId, Result, Tolerance};
use curvelink_geometry::Curve;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::build_chain;
use crate::chain::Chain;
use crate::record::CurveRecord;

/// Settings a host may load from its own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Tolerance for endpoint coincidence.
    pub tolerance: Tolerance,
    /// Evaluate groups on the rayon pool. Results are still reported in group order.
    pub parallel: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::vertex(),
            parallel: false,
        }
    }
}

/// Result of chaining a set of groups.
#[derive(Debug, Clone)]
pub enum SetOutcome<T> {
    /// One chain per input group, in group order.
    Chained(Vec<Chain<T>>),
    /// The first group (in input order) that could not be chained. Later
    /// groups were not evaluated, or their results were discarded.
    NotClosable { group: usize },
}

impl<T> SetOutcome<T> {
    pub fn is_chained(&self) -> bool {
        matches!(self, SetOutcome::Chained(_))
    }

    pub fn chains(self) -> Option<Vec<Chain<T>>> {
        match self {
            SetOutcome::Chained(chains) => Some(chains),
            SetOutcome::NotClosable { .. } => None,
        }
    }
}

/// Drives chain building over one or many groups of curves.
#[derive(Debug, Clone, Default)]
pub struct ChainSetAssembler {
    config: AssemblerConfig,
}

impl ChainSetAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssemblerConfig) -> Self {
        Self { config }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Chain a single flat pool of curves.
    ///
    /// A lone unbound closed curve (full circle or ellipse) is bound over one
    /// full period and returned as a one-curve chain. Any other unbound curve is
    /// a precondition failure.
    pub fn assemble_curves<C: Curve + Clone>(
        &self,
        mut curves: Vec<C>,
    ) -> Result<Option<Chain<CurveRecord<C>>>> {
        if let [curve] = curves.as_mut_slice() {
            if !curve.is_bound() && curve.is_closed() {
                if let Some(period) = curve.period() {
                    debug!(period, "binding closed curve over its full period");
                    curve.make_bound(0.0, period)?;
                }
            }
        }

        let records = curves
            .into_iter()
            .enumerate()
            .map(|(i, c)| CurveRecord::from_curve(CurveId::new(i), c))
            .collect::<Result<Vec<_>>>()?;
        build_chain(records, self.config.tolerance)
    }

    /// Chain every group; stop at the first group that does not chain.
    pub fn assemble_groups<C: Curve + Clone>(
        &self,
        groups: Vec<Vec<C>>,
    ) -> Result<SetOutcome<CurveRecord<C>>> {
        self.assemble(groups, false)
    }

    /// As [`Self::assemble_groups`], but every chain must also close on itself.
    pub fn assemble_loops<C: Curve + Clone>(
        &self,
        groups: Vec<Vec<C>>,
    ) -> Result<SetOutcome<CurveRecord<C>>> {
        self.assemble(groups, true)
    }

    fn assemble<C: Curve + Clone>(
        &self,
        groups: Vec<Vec<C>>,
        require_closed: bool,
    ) -> Result<SetOutcome<CurveRecord<C>>> {
        let run = |group: Vec<C>| -> Result<Option<Chain<CurveRecord<C>>>> {
            Ok(self
                .assemble_curves(group)?
                .filter(|chain| !require_closed || chain.is_closed()))
        };

        let count = groups.len();
        let mut chains = Vec::with_capacity(count);

        if self.config.parallel {
            let results: Vec<_> = groups.into_par_iter().map(run).collect();
            for (i, result) in results.into_iter().enumerate() {
                match result? {
                    Some(chain) => chains.push(chain),
                    None => return Ok(not_closable(i, count)),
                }
            }
        } else {
            for (i, group) in groups.into_iter().enumerate() {
                match run(group)? {
                    Some(chain) => chains.push(chain),
                    None => return Ok(not_closable(i, count)),
                }
            }
        }

        Ok(SetOutcome::Chained(chains))
    }
}

fn not_closable<T>(group: usize, count: usize) -> SetOutcome<T> {
    debug!(group, count, "group does not chain, abandoning set");
    SetOutcome::NotClosable { group }
}
