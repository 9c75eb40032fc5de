//! Trait definitions for the printer module.

use async_trait::async_trait;

use super::error::PrinterError;
use super::types::{PrintOutput, PrintRequest};

/// Something that turns a ticket into a physical receipt.
///
/// `print` resolves only once the print has finished (or failed).
#[async_trait]
pub trait Printer: Send + Sync {
    /// Returns the name of this printer implementation.
    fn name(&self) -> &str;

    /// Prints one ticket.
    async fn print(&self, request: &PrintRequest) -> Result<PrintOutput, PrinterError>;
}
