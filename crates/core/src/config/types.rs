use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::printer::PrinterConfig;

/// Root configuration. Every section has defaults, so an empty file is a
/// valid configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub printer: PrinterConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Where the kiosk form and its assets are served from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StaticFilesConfig {
    #[serde(default = "default_static_root")]
    pub root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_static_root(),
        }
    }
}

fn default_static_root() -> PathBuf {
    PathBuf::from("wwwroot")
}

/// Config view for API responses. Only reports whether a working
/// directory is set, not where it points.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub printer: SanitizedPrinterConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedPrinterConfig {
    pub program: String,
    pub base_args: Vec<String>,
    pub working_dir_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            static_files: config.static_files.clone(),
            printer: SanitizedPrinterConfig {
                program: config.printer.program.clone(),
                base_args: config.printer.base_args.clone(),
                working_dir_configured: config.printer.working_dir.is_some(),
                timeout_secs: config.printer.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[static_files]
root = "/srv/dms/wwwroot"

[printer]
program = "/usr/bin/python3"
base_args = ["/opt/dms/printTicket.py"]
working_dir = "/opt/dms"
timeout_secs = 45
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.static_files.root.to_str().unwrap(), "/srv/dms/wwwroot");
        assert_eq!(config.printer.program, "/usr/bin/python3");
        assert_eq!(config.printer.base_args, vec!["/opt/dms/printTicket.py"]);
        assert_eq!(config.printer.working_dir, Some(PathBuf::from("/opt/dms")));
        assert_eq!(config.printer.timeout_secs, Some(45));
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.static_files.root.to_str().unwrap(), "wwwroot");
        assert_eq!(config.printer.program, "python");
    }

    #[test]
    fn test_deserialize_unknown_section_is_ignored() {
        let toml = r#"
[server]
port = 8081

[metrics]
enabled = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_sanitized_config() {
        let mut config = Config::default();
        config.printer.working_dir = Some(PathBuf::from("/home/kiosk/secret"));

        let sanitized = SanitizedConfig::from(&config);
        let json = serde_json::to_value(&sanitized).unwrap();

        assert_eq!(json["server"]["port"], 8080);
        assert_eq!(json["printer"]["program"], "python");
        assert_eq!(json["printer"]["working_dir_configured"], true);
        assert!(json["printer"].get("working_dir").is_none());
        assert!(json["printer"].get("timeout_secs").is_none());
    }
}
