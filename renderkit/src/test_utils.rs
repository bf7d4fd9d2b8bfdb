//! Logger that keeps records per test thread so assertions can see them.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

struct CapturingLogger;

static LOGGER: CapturingLogger = CapturingLogger;
static INSTALL: Once = Once::new();

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let message = record.args().to_string();
        RECORDS.with(|records| records.borrow_mut().push((record.level(), message)));
    }

    fn flush(&self) {}
}

/// Runs `f` and returns everything it logged on this thread.
pub(crate) fn capture_logs<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.borrow_mut().drain(..).collect())
}
