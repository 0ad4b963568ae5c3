//! `log` backend and panic reporting for the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::panic::PanicHookInfo;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Route Rust panics to `console.error` with their source location.
///
/// Only meaningful on `wasm32`, where the default hook prints nowhere.
pub fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            web_sys::console::error_1(&panic_line(info).into());
            previous(info);
        }));
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let msg = line.into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[polar-clock {level:<5} {target}] {message}")
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn panic_line(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>");
    match info.location() {
        Some(loc) => format_line(
            Level::Error,
            &format!("{}:{}", loc.file(), loc.line()),
            &format!("panicked: {message}"),
        ),
        None => format_line(Level::Error, "unknown", &format!("panicked: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn line_carries_level_and_target() {
        assert_eq!(
            format_line(Level::Warn, "polar_clock_core::bootstrap", "no CSS.supports"),
            "[polar-clock WARN  polar_clock_core::bootstrap] no CSS.supports"
        );
    }

    #[test]
    fn panic_line_names_location_and_message() {
        let captured = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&captured);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            *sink.lock().unwrap() = panic_line(info);
        }));
        let result = std::panic::catch_unwind(|| panic!("mount vanished"));
        std::panic::set_hook(previous);

        assert!(result.is_err());
        let line = captured.lock().unwrap().clone();
        assert!(line.starts_with("[polar-clock ERROR "), "got {line}");
        assert!(line.contains("logger.rs:"), "got {line}");
        assert!(line.ends_with("] panicked: mount vanished"), "got {line}");
    }
}
