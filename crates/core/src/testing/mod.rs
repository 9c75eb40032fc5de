//! Testing utilities: a recording printer and a settable clock.
//!
//! # Example
//!
//! ```rust,ignore
//! use storage_ticket_core::testing::{FixedClock, MockPrinter};
//!
//! let printer = MockPrinter::new();
//! let clock = FixedClock::at(2017, 2, 1, 10, 0);
//!
//! // Use in AppState...
//! ```

mod fixed_clock;
mod mock_printer;

pub use fixed_clock::FixedClock;
pub use mock_printer::{MockPrinter, RecordedPrint};
