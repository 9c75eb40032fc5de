//! Printer module for producing physical receipts.
//!
//! This module provides the `Printer` trait and the `CommandPrinter`
//! implementation, which hands each ticket to an external executable as
//! six positional arguments and waits for it to exit.
//!
//! # Example
//!
//! ```ignore
//! use storage_ticket_core::printer::{CommandPrinter, PrintRequest, Printer};
//!
//! let printer = CommandPrinter::with_defaults();
//! let output = printer.print(&PrintRequest::from(&ticket)).await?;
//! println!("printer said: {}", output.combined);
//! ```

mod command;
mod config;
mod error;
mod traits;
mod types;

pub use command::CommandPrinter;
pub use config::PrinterConfig;
pub use error::{signal_name, PrinterError};
pub use traits::Printer;
pub use types::{PrintOutput, PrintRequest};
