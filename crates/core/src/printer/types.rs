//! Types exchanged with the printer.

use crate::ticket::Ticket;

/// The six positional values handed to the printer.
///
/// The printer reads its arguments by position, so [`PrintRequest::args`]
/// is the one place that defines their order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRequest {
    pub expire_date: String,
    pub name: String,
    pub email: String,
    pub storage_type: String,
    pub description: String,
    pub submit_time: String,
}

impl PrintRequest {
    /// Arguments in printer order:
    /// `expireDate, name, email, storageType, description, submitTime`.
    pub fn args(&self) -> [&str; 6] {
        [
            self.expire_date.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.storage_type.as_str(),
            self.description.as_str(),
            self.submit_time.as_str(),
        ]
    }
}

impl From<&Ticket> for PrintRequest {
    fn from(ticket: &Ticket) -> Self {
        Self {
            expire_date: ticket.expire_date.clone(),
            name: ticket.name.clone(),
            email: ticket.email.clone(),
            storage_type: ticket.storage_type.clone(),
            description: ticket.description.clone(),
            submit_time: ticket.submit_time.clone(),
        }
    }
}

/// Result of a successful print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintOutput {
    /// Stdout followed by stderr.
    pub combined: String,
    /// Wall time the printer took, in milliseconds.
    pub duration_ms: u64,
}
