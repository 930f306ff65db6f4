/// Receives human-readable progress messages from a run. Messages are for observability only;
/// the choice of sink never changes computed results.
pub trait LogSink {
    fn log(&self, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str),
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _: &str) {}
}

/// Forwards messages to `tracing` at debug level under the `topsis` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::debug!(target: "topsis", "{message}");
    }
}
