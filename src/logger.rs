use std::fmt;

/// Sink for debug output describing why a request did or did not get CORS headers.
///
/// Closures taking [`fmt::Arguments`] implement this trait.
pub trait Logger: Send + Sync {
    fn log(&self, message: fmt::Arguments<'_>);
}

impl<F> Logger for F
where
    F: Fn(fmt::Arguments<'_>) + Send + Sync,
{
    fn log(&self, message: fmt::Arguments<'_>) {
        self(message)
    }
}

/// Default debug sink: emits `tracing` debug events under the `ferric_cors` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "ferric_cors", "{}", message);
    }
}

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;
