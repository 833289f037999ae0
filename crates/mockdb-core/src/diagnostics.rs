//! Diagnostic sink for parse decisions

/// Receives the classification decisions made during a parse
///
/// Sinks are fire-and-forget: the parser ignores anything a sink does, so
/// an implementation can never influence control flow or output.
pub trait DiagnosticSink {
    fn record(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Drops all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _message: &str) {}
}
