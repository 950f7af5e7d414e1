//! In-memory logger for tests that assert on log output.
//!
//! The log max level is process wide, so tests that change it hold `lock()`.

use std::sync::{Mutex, MutexGuard};

use log::{Log, Metadata, Record};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LEVEL_LOCK: Mutex<()> = Mutex::new(());
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        records_guard().push(record.args().to_string());
    }

    fn flush(&self) {}
}

fn records_guard() -> MutexGuard<'static, Vec<String>> {
    RECORDS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn lock() -> MutexGuard<'static, ()> {
    LEVEL_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Install the capture logger; later calls are no-ops.
pub fn install() {
    let _ = log::set_logger(&LOGGER);
}

pub fn clear() {
    records_guard().clear();
}

pub fn records() -> Vec<String> {
    records_guard().clone()
}
