//! `log` backend that forwards records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::console;

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
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

pub(crate) fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the console logger (once) and set the max level.
pub fn init_logging(level: LevelFilter) {
    // A second call only changes the level
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Change the log level from JS: `off`, `error`, `warn`, `info`, `debug`
/// or `trace`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level)?;
    init_logging(filter);
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter, JsValue> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {}", level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        assert_eq!(default_level(), expected);
    }

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(
                &Record::builder()
                    .level(Level::Debug)
                    .target("pixtrim_core::transform")
                    .args(format_args!("resized to {}x{}", 200, 150))
                    .build()
            ),
            "[DEBUG] pixtrim_core::transform: resized to 200x150"
        );
    }
}
