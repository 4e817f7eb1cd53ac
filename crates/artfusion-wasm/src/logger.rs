//! `log` backend that forwards records to the browser console.
//!
//! Installed once from [`crate::init`]. Error and warning records go to
//! `console.error` and `console.warn`, info to `console.info`, everything
//! finer to `console.debug`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

/// Level used when none is configured.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls only change the level.
pub(crate) fn install(level: LevelFilter) {
    // set_logger fails when a logger is already installed, which is fine
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name such as `"debug"` or `"WARN"`, falling back to info.
pub(crate) fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(DEFAULT_LEVEL)
}

/// `[LEVEL target] message`
pub(crate) fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
}

/// Change the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"` or `"trace"`). Unknown names select info.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    install(parse_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level(" off "), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Debug, "artfusion_core::mask", "otsu threshold 104"),
            "[DEBUG artfusion_core::mask] otsu threshold 104"
        );
    }
}
