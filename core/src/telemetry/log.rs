use log::{debug, info, warn};

/// Thin wrapper over the `log` facade carrying a component target.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self::for_component("lumicore")
    }

    pub fn for_component(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn caution(&self, message: &str) {
        warn!(target: self.target, "{}", message);
    }

    pub fn detail(&self, message: &str) {
        debug!(target: self.target, "{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
