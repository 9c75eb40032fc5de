//! Configuration for the receipt printer invoker.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How to launch the external receipt printer.
///
/// The process is started as `program base_args... <ticket args>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Executable to run.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the ticket arguments (usually the script).
    #[serde(default = "default_base_args")]
    pub base_args: Vec<String>,

    /// Working directory for the printer process. Inherited when unset.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Kill the printer after this many seconds. Unset waits forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_program() -> String {
    "python".to_string()
}

fn default_base_args() -> Vec<String> {
    vec!["printTicket.py".to_string()]
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            base_args: default_base_args(),
            working_dir: None,
            timeout_secs: None,
        }
    }
}
