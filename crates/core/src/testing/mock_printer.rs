//! Mock printer for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::printer::{PrintOutput, PrintRequest, Printer, PrinterError};

/// A recorded print for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedPrint {
    /// The request handed to the printer.
    pub request: PrintRequest,
    /// Whether the print succeeded.
    pub success: bool,
}

/// Mock implementation of the Printer trait.
///
/// Records every request and succeeds unless told otherwise:
///
/// ```rust,ignore
/// use storage_ticket_core::testing::MockPrinter;
///
/// let printer = MockPrinter::new();
/// printer.fail_next_with_exit(1, "no USB device").await;
///
/// let err = printer.print(&request).await.unwrap_err();
/// assert_eq!(err.to_string(), "exit status 1");
/// assert_eq!(printer.print_count().await, 1);
/// ```
#[derive(Debug, Default)]
pub struct MockPrinter {
    prints: Arc<RwLock<Vec<RecordedPrint>>>,
    next_error: Arc<RwLock<Option<PrinterError>>>,
    output: Arc<RwLock<String>>,
}

impl MockPrinter {
    /// Create a new mock printer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded prints.
    pub async fn recorded_prints(&self) -> Vec<RecordedPrint> {
        self.prints.read().await.clone()
    }

    /// Get the number of print attempts.
    pub async fn print_count(&self) -> usize {
        self.prints.read().await.len()
    }

    /// Configure the next print to fail with the given error.
    pub async fn set_next_error(&self, error: PrinterError) {
        *self.next_error.write().await = Some(error);
    }

    /// Configure the next print to fail as if the process exited with `code`.
    pub async fn fail_next_with_exit(&self, code: i32, output: impl Into<String>) {
        self.set_next_error(PrinterError::Exited {
            code,
            output: output.into(),
        })
        .await;
    }

    /// Set the output reported by successful prints.
    pub async fn set_output(&self, output: impl Into<String>) {
        *self.output.write().await = output.into();
    }
}

#[async_trait]
impl Printer for MockPrinter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn print(&self, request: &PrintRequest) -> Result<PrintOutput, PrinterError> {
        let error = self.next_error.write().await.take();

        self.prints.write().await.push(RecordedPrint {
            request: request.clone(),
            success: error.is_none(),
        });

        match error {
            Some(err) => Err(err),
            None => Ok(PrintOutput {
                combined: self.output.read().await.clone(),
                duration_ms: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PrintRequest {
        PrintRequest {
            expire_date: "March 5".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            storage_type: "pallet".to_string(),
            description: "table saw".to_string(),
            submit_time: "2017-02-06 09:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_records_prints() {
        let printer = MockPrinter::new();
        printer.set_output("ok").await;

        let output = printer.print(&request()).await.unwrap();
        assert_eq!(output.combined, "ok");

        let prints = printer.recorded_prints().await;
        assert_eq!(prints.len(), 1);
        assert!(prints[0].success);
        assert_eq!(prints[0].request.name, "Ann");
    }

    #[tokio::test]
    async fn test_next_error_applies_once() {
        let printer = MockPrinter::new();
        printer.fail_next_with_exit(2, "paper out").await;

        let err = printer.print(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "exit status 2");
        assert!(printer.print(&request()).await.is_ok());

        let prints = printer.recorded_prints().await;
        assert!(!prints[0].success);
        assert!(prints[1].success);
    }
}
