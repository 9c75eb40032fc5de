use std::sync::Arc;
use storage_ticket_core::{Clock, Config, Printer, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    printer: Arc<dyn Printer>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, printer: Arc<dyn Printer>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            printer,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    /// Owned handle to the printer, for moving into a spawned task.
    pub fn printer(&self) -> Arc<dyn Printer> {
        Arc::clone(&self.printer)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
