//! Error types for the printer module.

use thiserror::Error;

/// Errors from invoking the external printer.
///
/// The display text is what a client gets to see; captured process output
/// is kept in the variant for server-side logging only.
#[derive(Debug, Error)]
pub enum PrinterError {
    /// The printer process could not be started.
    #[error("exec: {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The printer exited with a non-zero status.
    #[error("exit status {code}")]
    Exited { code: i32, output: String },

    /// The printer was terminated by a signal.
    #[error("signal: {}", signal_name(*signal))]
    Signaled { signal: i32, output: String },

    /// The printer did not finish within the configured timeout.
    #[error("printer timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while waiting on the printer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrinterError {
    /// Combined stdout/stderr captured before the failure, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Exited { output, .. } | Self::Signaled { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Human-readable name of a POSIX signal number.
pub fn signal_name(signal: i32) -> String {
    let name = match signal {
        1 => "hangup",
        2 => "interrupt",
        3 => "quit",
        4 => "illegal instruction",
        5 => "trace/breakpoint trap",
        6 => "aborted",
        8 => "floating point exception",
        9 => "killed",
        11 => "segmentation fault",
        13 => "broken pipe",
        14 => "alarm clock",
        15 => "terminated",
        other => return format!("signal {}", other),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hides_output() {
        let err = PrinterError::Exited {
            code: 1,
            output: "usb.core.NoBackendError".to_string(),
        };
        assert_eq!(err.to_string(), "exit status 1");
        assert_eq!(err.output(), Some("usb.core.NoBackendError"));
    }

    #[test]
    fn test_spawn_display() {
        let err = PrinterError::Spawn {
            program: "python".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "exec: \"python\": not found");
        assert!(err.output().is_none());
    }

    #[test]
    fn test_signaled_display_names_signal() {
        let killed = PrinterError::Signaled {
            signal: 9,
            output: String::new(),
        };
        let segv = PrinterError::Signaled {
            signal: 11,
            output: "core dumped".to_string(),
        };
        assert_eq!(killed.to_string(), "signal: killed");
        assert_eq!(segv.to_string(), "signal: segmentation fault");
        assert_eq!(segv.output(), Some("core dumped"));
    }

    #[test]
    fn test_unknown_signal_name() {
        assert_eq!(signal_name(15), "terminated");
        assert_eq!(signal_name(42), "signal 42");
    }
}
