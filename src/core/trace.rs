//! Side channel for per-class analysis traces.
//!
//! Rules never decide on their own whether to trace. The caller hands them a
//! [`TraceSink`]; [`trace_from_env`] builds the default one, honouring
//! `READONLY_SERVICES_LOGGING=off`. Sinks must not influence results.

use std::sync::Mutex;

use log::Level;

/// Environment variable that turns tracing off when set to exactly `off`
pub const TRACE_ENV: &str = "READONLY_SERVICES_LOGGING";

/// `log` target under which trace events are emitted
pub const TRACE_TARGET: &str = "readonly_services::trace";

pub trait TraceSink {
    fn record(&self, level: Level, message: &str);

    /// Lets callers skip formatting events nobody will see
    fn is_enabled(&self) -> bool {
        true
    }

    fn debug(&self, message: &str) {
        self.record(Level::Debug, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: TRACE_TARGET, level, "{message}");
    }
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&self, _level: Level, _message: &str) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Keeps events in memory, for hosts that want to inspect them
#[derive(Debug, Default)]
pub struct CaptureTrace {
    events: Mutex<Vec<(Level, String)>>,
}

impl CaptureTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl TraceSink for CaptureTrace {
    fn record(&self, level: Level, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((level, message.to_string()));
        }
    }
}

/// Sink for the given value of [`TRACE_ENV`]
pub fn trace_from_value(value: Option<&str>) -> Box<dyn TraceSink> {
    match value {
        Some("off") => Box::new(NoTrace),
        _ => Box::new(LogTrace),
    }
}

/// Sink selected by the current environment. Read on every call.
pub fn trace_from_env() -> Box<dyn TraceSink> {
    let value = std::env::var(TRACE_ENV).ok();
    trace_from_value(value.as_deref())
}
