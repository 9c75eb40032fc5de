//! Core ticket data types.

use serde::{Deserialize, Serialize};

use super::deadline::Deadline;

/// A storage ticket as submitted by the kiosk form.
///
/// The descriptive fields come from the submitter verbatim. The timing
/// fields are always computed by the server when the ticket is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub name: String,
    pub email: String,
    pub description: String,
    #[serde(rename = "storageType")]
    pub storage_type: String,
    /// When the ticket was submitted (`YYYY-MM-DD HH:MM`).
    #[serde(rename = "submitTime")]
    pub submit_time: String,
    /// The pickup deadline (`Month Day`).
    #[serde(rename = "expireTime")]
    pub expire_date: String,
}

impl Ticket {
    /// Builds a ticket from a decoded form and a freshly computed deadline.
    ///
    /// Any timing values the client put in the form are dropped here.
    pub fn new(form: TicketForm, deadline: Deadline) -> Self {
        Self {
            name: form.name,
            email: form.email,
            description: form.description,
            storage_type: form.storage_type,
            submit_time: deadline.submit_time,
            expire_date: deadline.expire_date,
        }
    }
}

/// Fields decoded from a form submission.
///
/// Absent fields decode to empty strings. The client may send
/// `submitTime`/`expireTime`; they are accepted so the form decodes, but
/// they never make it into a [`Ticket`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TicketForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "storageType")]
    pub storage_type: String,
    #[serde(default, rename = "submitTime")]
    pub client_submit_time: Option<String>,
    #[serde(default, rename = "expireTime")]
    pub client_expire_time: Option<String>,
}
