use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `DMS_STORAGE_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "DMS_STORAGE_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(Figment::new().merge(Toml::file(path)))
}

/// Built-in defaults with environment variable overrides, for running
/// without a config file.
pub fn load_default_config() -> Result<Config, ConfigError> {
    extract(Figment::new())
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[server]
port = 9000
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[server]
port = "eighty"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[printer]
program = "python3"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.printer.program, "python3");
        assert_eq!(config.printer.base_args, vec!["printTicket.py"]);
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[server]
port = 3000
"#,
            )?;
            jail.set_env("DMS_STORAGE_SERVER__PORT", "4000");
            jail.set_env("DMS_STORAGE_PRINTER__TIMEOUT_SECS", "20");

            let config = load_config(Path::new("config.toml")).unwrap();
            assert_eq!(config.server.port, 4000);
            assert_eq!(config.printer.timeout_secs, Some(20));
            Ok(())
        });
    }

    #[test]
    fn test_load_default_config() {
        figment::Jail::expect_with(|_jail| {
            let config = load_default_config().unwrap();
            assert_eq!(config, Config::default());
            Ok(())
        });
    }
}
