/// Where the optimizer reports what it did.
///
/// Diagnostics never influence the result, any sink (including [`NullDiagnostics`]) produces the same ops.
pub trait Diagnostics {
    /// Whether debug output is wanted at all, serializing a pipeline isn't free.
    fn enabled(&self) -> bool;

    fn debug(&self, message: &str);

    fn warn(&self, message: &str);
}

/// Forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn enabled(&self) -> bool {
        tracing::enabled!(target: "chroma_opt", tracing::Level::DEBUG)
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "chroma_opt", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "chroma_opt", "{message}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn enabled(&self) -> bool {
        false
    }

    fn debug(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}
