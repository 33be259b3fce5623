//! Console Logger
//!
//! Routes the `log` facade to the browser console so frontend code can use
//! the ordinary `log::info!`/`log::warn!` macros. Each level maps to the
//! matching console method, keeping browser-side filtering usable.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger {
    max_level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    if target.is_empty() {
        format!("[{}] {}", level, message)
    } else {
        format!("[{}] {}: {}", level, target, message)
    }
}

/// Install the console sink for the whole app.
///
/// Later calls are no-ops (the facade accepts one logger per process),
/// which keeps hot-reload harnesses from panicking on re-init.
pub fn init(max_level: LevelFilter) {
    let logger = ConsoleLogger { max_level };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_target_prefix() {
        let line = format_record(Level::Warn, "devatlas_web::api", "send failed");
        assert_eq!(line, "[WARN] devatlas_web::api: send failed");
    }

    #[test]
    fn formats_without_target() {
        let line = format_record(Level::Info, "", "mounted");
        assert_eq!(line, "[INFO] mounted");
    }
}
