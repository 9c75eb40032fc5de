//! Printer implementation that runs an external executable.

use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use super::config::PrinterConfig;
use super::error::PrinterError;
use super::traits::Printer;
use super::types::{PrintOutput, PrintRequest};
use crate::metrics::{PRINTS_TOTAL, PRINT_DURATION};

/// Runs the configured printer program once per ticket and waits for it.
pub struct CommandPrinter {
    config: PrinterConfig,
}

impl CommandPrinter {
    /// Creates a new command printer with the given configuration.
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// Creates a printer with default configuration (`python printTicket.py`).
    pub fn with_defaults() -> Self {
        Self::new(PrinterConfig::default())
    }

    /// Full argument vector after the program name.
    pub fn build_args(&self, request: &PrintRequest) -> Vec<String> {
        let mut args = self.config.base_args.clone();
        args.extend(request.args().iter().map(|a| a.to_string()));
        args
    }

    async fn run(&self, request: &PrintRequest) -> Result<PrintOutput, PrinterError> {
        let start = Instant::now();
        let args = self.build_args(request);
        debug!(program = %self.config.program, ?args, "Spawning printer process");

        let mut command = Command::new(&self.config.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(ref dir) = self.config.working_dir {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|source| PrinterError::Spawn {
            program: self.config.program.clone(),
            source,
        })?;

        let output = match self.config.timeout_secs {
            Some(timeout_secs) => timeout(
                Duration::from_secs(timeout_secs),
                child.wait_with_output(),
            )
            .await
            .map_err(|_| PrinterError::Timeout { timeout_secs })??,
            None => child.wait_with_output().await?,
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(match (output.status.code(), exit_signal(&output.status)) {
                (Some(code), _) => PrinterError::Exited {
                    code,
                    output: combined,
                },
                (None, Some(signal)) => PrinterError::Signaled {
                    signal,
                    output: combined,
                },
                (None, None) => PrinterError::Exited {
                    code: -1,
                    output: combined,
                },
            });
        }

        Ok(PrintOutput {
            combined,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

#[async_trait]
impl Printer for CommandPrinter {
    fn name(&self) -> &str {
        "command"
    }

    async fn print(&self, request: &PrintRequest) -> Result<PrintOutput, PrinterError> {
        let start = Instant::now();
        let result = self.run(request).await;
        PRINT_DURATION.observe(start.elapsed().as_secs_f64());

        match &result {
            Ok(_) => PRINTS_TOTAL.with_label_values(&["success"]).inc(),
            Err(e) => {
                warn!(program = %self.config.program, error = %e, "Printer invocation failed");
                PRINTS_TOTAL.with_label_values(&["failure"]).inc();
            }
        }

        result
    }
}
