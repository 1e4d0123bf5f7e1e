#![forbid(unsafe_code)]
#![warn(clippy::must_use_candidate)]

//! Peephole optimization of color op pipelines.
//!
//! The rules only ever remove ops: identity ops, and adjacent pairs of ops that undo each other.
//! They're applied repeatedly until nothing changes, or [`MAX_OPTIMIZATION_PASSES`] is hit.

use chroma_core::Op;

pub mod diagnostics;
pub mod optimizer;

pub use diagnostics::{Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use optimizer::{Optimizer, Rewrite, Rule, Summary, Termination};
pub use remove_inverse_ops::run as remove_inverse_ops;
pub use remove_no_ops::run as remove_no_ops;

mod remove_inverse_ops;
mod remove_no_ops;


pub const MAX_OPTIMIZATION_PASSES: usize = 8;

/// Optimizes `ops` in place with the default rules, reporting through `tracing`.
pub fn optimize<T: Op>(ops: &mut Vec<T>) {
    optimize_with(ops, &TracingDiagnostics);
}

/// [`optimize`], reporting to `diagnostics` instead.
pub fn optimize_with<T: Op>(ops: &mut Vec<T>, diagnostics: &dyn Diagnostics) {
    Optimizer::optimized().run(ops, diagnostics);
}
