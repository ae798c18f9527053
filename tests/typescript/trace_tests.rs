//! Environment toggle for trace output. Kept in its own test binary with a
//! single test because it mutates the process environment.

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};
use readonly_services::TypeScriptEngine;
use readonly_services::rules::readonly_injected_services::ReadonlyInjectedServices;
use readonly_services::trace::{TRACE_ENV, TRACE_TARGET, TraceSink, trace_from_env};
use readonly_services::types::{Dialect, Target};
use tempfile::tempdir;

struct TraceRecorder {
    events: Mutex<Vec<String>>,
}

impl TraceRecorder {
    fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Log for TraceRecorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == TRACE_TARGET
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.events.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static RECORDER: TraceRecorder = TraceRecorder {
    events: Mutex::new(Vec::new()),
};

fn set_trace_env(value: Option<&str>) {
    // SAFETY: this binary runs a single test, so no other thread reads the environment
    unsafe {
        match value {
            Some(value) => std::env::set_var(TRACE_ENV, value),
            None => std::env::remove_var(TRACE_ENV),
        }
    }
}

#[test]
fn test_logging_env_is_read_on_every_lint() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let source = "class UserController {
    constructor(private userService: UserService, private cacheService: CacheService) {}

    reset() {
        this.cacheService = new CacheService();
    }
}
";
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("user.controller.ts");
    std::fs::write(&path, source).unwrap();
    let target = Target::new(path, source.to_string(), Dialect::TypeScript);
    let rule = ReadonlyInjectedServices::default();
    let engine = TypeScriptEngine::new();

    set_trace_env(Some("off"));
    assert!(!trace_from_env().is_enabled());
    let silenced = engine.lint_source(&target, &[&rule]).unwrap();
    assert_eq!(RECORDER.count(), 0);

    set_trace_env(Some("on"));
    assert!(trace_from_env().is_enabled());
    let traced = engine.lint_source(&target, &[&rule]).unwrap();
    let after_on = RECORDER.count();
    assert!(after_on > 0);

    // Anything other than exactly "off" keeps tracing
    set_trace_env(Some("OFF"));
    assert!(trace_from_env().is_enabled());

    set_trace_env(Some("off"));
    let silenced_again = engine.lint_source(&target, &[&rule]).unwrap();
    assert_eq!(RECORDER.count(), after_on);

    set_trace_env(None);
    assert!(trace_from_env().is_enabled());

    assert_eq!(silenced, traced);
    assert_eq!(traced, silenced_again);
    assert_eq!(traced.len(), 1);
    assert_eq!(traced[0].span.text(source), "private userService: UserService");
}
