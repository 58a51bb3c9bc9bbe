use log::LevelFilter;

pub fn parse_level(name: &str) -> Result<LevelFilter, String> {
    name.trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level `{name}`"))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => console::error_1(&line),
                Level::Warn => console::warn_1(&line),
                Level::Info => console::info_1(&line),
                Level::Debug => console::debug_1(&line),
                Level::Trace => console::log_1(&line),
            }
        }

        fn flush(&self) {}
    }

    pub static LOGGER: ConsoleLogger = ConsoleLogger;
}

/// Routes `log` records to the browser console. Later calls only change the level.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&console::LOGGER);
    log::set_max_level(level);
}

/// Native hosts install their own logger; only the level is applied here.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    log::set_max_level(level);
}
