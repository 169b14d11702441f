use log::{Level, LevelFilter, Log, Metadata, Record};

/// Routes `log` records from the app and `shared` to the browser console
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
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

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Component-scoped helpers over the `log` facade
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: "la-maison", "{}: {}", component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: "la-maison", "{}: {}", component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: "la-maison", "{}: {}", component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: "la-maison", "{}: {}", component, message);
    }
}
