use log::Level;

/// Component-tagged logger.
///
/// Writes to the browser console on wasm and to the `log` facade elsewhere,
/// so the same call sites work under native tests.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        let line = format!("[{}] {}", component, message);

        #[cfg(target_arch = "wasm32")]
        {
            match level {
                Level::Error => gloo::console::error!(line),
                Level::Warn => gloo::console::warn!(line),
                Level::Info => gloo::console::info!(line),
                Level::Debug | Level::Trace => gloo::console::debug!(line),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            log::log!(target: "employee_register", level, "{}", line);
        }
    }
}
