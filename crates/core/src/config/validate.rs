use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Printer program is set
/// - Printer timeout, when set, is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.printer.program.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "printer.program cannot be empty".to_string(),
        ));
    }

    if config.printer.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "printer.timeout_secs cannot be 0; leave it unset to wait forever".to_string(),
        ));
    }

    Ok(())
}
