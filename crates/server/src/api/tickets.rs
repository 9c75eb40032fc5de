//! Ticket submission handler.
//!
//! `POST /ticketApi/` takes the kiosk form, stamps the ticket with its
//! submission time and pickup deadline, prints it, and echoes the ticket
//! back as JSON.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap},
    Json,
};
use std::sync::Arc;
use storage_ticket_core::ticket::is_form_content_type;
use storage_ticket_core::{compute_deadline, decode_ticket_form, PrintRequest, Ticket};
use tracing::{debug, error, info};

use super::error::ApiError;
use crate::metrics::TICKETS_SUBMITTED_TOTAL;
use crate::state::AppState;

/// Decode, date and print a storage ticket.
///
/// The response is only sent once the printer has finished. The print runs
/// in its own task, so a client hanging up does not abort it.
pub async fn submit_ticket(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap_or_default());
    if !is_form_content_type(content_type) {
        return Err(ApiError::MalformedRequest(format!(
            "unsupported content type {:?}",
            content_type.unwrap_or_default()
        )));
    }

    let body = body.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let form = decode_ticket_form(&body)?;

    let deadline = compute_deadline(state.clock().now());
    let ticket = Ticket::new(form, deadline);

    let request = PrintRequest::from(&ticket);
    let printer = state.printer();
    info!(printer = printer.name(), args = ?request.args(), "Printing ticket");

    let result = tokio::spawn(async move { printer.print(&request).await }).await;

    match result {
        Ok(Ok(output)) => {
            debug!(output = %output.combined, duration_ms = output.duration_ms, "Printer finished");
            TICKETS_SUBMITTED_TOTAL.inc();
            Ok(Json(ticket))
        }
        Ok(Err(e)) => {
            error!(error = %e, output = e.output().unwrap_or_default(), "Printing ticket failed");
            Err(ApiError::Print(e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Printer task did not complete");
            Err(ApiError::Print(e.to_string()))
        }
    }
}
