use core::fmt;
use std::num::NonZeroUsize;

use chroma_core::{Op, serialize_ops};

use crate::{Diagnostics, MAX_OPTIMIZATION_PASSES};

const DEFAULT_MAX_PASSES: NonZeroUsize = NonZeroUsize::new(MAX_OPTIMIZATION_PASSES).unwrap();

/// A rewrite over a whole op list, returning how many changes it made.
pub trait Rewrite<T> {
    fn run(&self, ops: &mut Vec<T>) -> usize;
}

impl<T, F> Rewrite<T> for F
where
    F: Fn(&mut Vec<T>) -> usize,
{
    fn run(&self, ops: &mut Vec<T>) -> usize {
        self(ops)
    }
}

pub enum Rule<T> {
    RemoveNoOps,
    RemoveInverseOps,
    Custom(Box<dyn Rewrite<T>>),
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = match self {
            Self::Custom(_) => return f.debug_tuple("Custom").finish_non_exhaustive(),
            Self::RemoveNoOps => "RemoveNoOps",
            Self::RemoveInverseOps => "RemoveInverseOps",
        };

        f.write_str(data)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Termination {
    /// A pass made no changes.
    Converged,
    /// The last allowed pass still made changes.
    BoundExceeded,
}

/// What a single [`Optimizer::run`] did.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Summary {
    pub original_len: usize,
    pub final_len: usize,
    pub passes: usize,
    pub no_ops_removed: usize,
    pub inverse_pairs_removed: usize,
    /// Changes reported by [`Rule::Custom`] rules.
    pub rewrites: usize,
    pub termination: Termination,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Optimized {}->{}, {} passes, {} noops removed, {} inverse ops removed",
            self.original_len,
            self.final_len,
            self.passes,
            self.no_ops_removed,
            self.inverse_pairs_removed
        )?;

        if self.rewrites != 0 {
            write!(f, ", {} other rewrites", self.rewrites)?;
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct Optimizer<T> {
    pub rules: Vec<Rule<T>>,
    pub max_passes: NonZeroUsize,
}

impl<T> Default for Optimizer<T> {
    fn default() -> Self {
        Self { rules: Vec::new(), max_passes: DEFAULT_MAX_PASSES }
    }
}

impl<T: Op> Optimizer<T> {
    #[must_use]
    pub fn unoptimized() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules(rules: Vec<Rule<T>>) -> Self {
        Self { rules, max_passes: DEFAULT_MAX_PASSES }
    }

    /// No-ops go first so that an inverse pair split by a no-op can be found in the same pass.
    #[must_use]
    pub fn optimized() -> Self {
        Self::with_rules(vec![Rule::RemoveNoOps, Rule::RemoveInverseOps])
    }

    #[must_use]
    pub fn with_max_passes(mut self, max_passes: NonZeroUsize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Applies every rule, in order, once per pass until a pass makes no changes or the pass
    /// limit is reached. Hitting the limit isn't an error, `ops` is left however the last pass left it.
    pub fn run(&self, ops: &mut Vec<T>, diagnostics: &dyn Diagnostics) -> Summary {
        let mut summary = Summary {
            original_len: ops.len(),
            final_len: ops.len(),
            passes: 0,
            no_ops_removed: 0,
            inverse_pairs_removed: 0,
            rewrites: 0,
            termination: Termination::Converged,
        };

        if ops.is_empty() {
            return summary;
        }

        if diagnostics.enabled() {
            diagnostics.debug("Optimizing op pipeline...");
            diagnostics.debug(&serialize_ops(ops, 4).to_string());
        }

        loop {
            if summary.passes == self.max_passes.get() {
                summary.termination = Termination::BoundExceeded;
                break;
            }

            summary.passes += 1;

            let mut changes = 0;
            for rule in &self.rules {
                let count = match rule {
                    Rule::RemoveNoOps => {
                        let count = crate::remove_no_ops(ops);
                        summary.no_ops_removed += count;
                        count
                    }
                    Rule::RemoveInverseOps => {
                        let count = crate::remove_inverse_ops(ops);
                        summary.inverse_pairs_removed += count;
                        count
                    }
                    Rule::Custom(rewrite) => {
                        let count = rewrite.run(ops);
                        summary.rewrites += count;
                        count
                    }
                };

                changes += count;
            }

            if changes == 0 {
                break;
            }
        }

        summary.final_len = ops.len();

        if summary.termination == Termination::BoundExceeded {
            diagnostics.warn(&format!(
                "The max number of passes, {}, was reached during optimization. \
                 This is likely a sign that either the complexity of the color transform is very high, \
                 or that some internal optimizers are in conflict (undo-ing / redo-ing the other's results).",
                summary.passes
            ));
        }

        if diagnostics.enabled() {
            diagnostics.debug(&format!("{summary}\n{}", serialize_ops(ops, 4)));
        }

        summary
    }
}
