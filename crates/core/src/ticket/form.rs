//! Decoding of `application/x-www-form-urlencoded` submissions.
//!
//! Decoding happens in two steps that fail differently: the body is first
//! parsed into key/value pairs ([`FormError::Malformed`]), then the pairs
//! are mapped onto [`TicketForm`] by field name ([`FormError::Decode`]).

use serde_json::{Map, Value};
use thiserror::Error;

use super::types::TicketForm;

/// Content type of the kiosk form submission.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Errors from turning a request body into a [`TicketForm`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// The body could not be parsed as form data.
    #[error("{0}")]
    Malformed(String),

    /// The parsed fields do not fit the ticket form.
    #[error("{0}")]
    Decode(String),
}

/// Parses and decodes a form body in one go.
pub fn decode_ticket_form(body: &[u8]) -> Result<TicketForm, FormError> {
    let pairs = parse_form(body)?;
    decode_fields(pairs)
}

/// Parses a urlencoded body into key/value pairs, in body order.
///
/// Empty segments (`a=1&&b=2`) are skipped, a segment without `=` is a key
/// with an empty value.
pub fn parse_form(body: &[u8]) -> Result<Vec<(String, String)>, FormError> {
    let body = std::str::from_utf8(body)
        .map_err(|e| FormError::Malformed(format!("invalid UTF-8 in form body: {}", e)))?;

    let mut pairs = Vec::new();
    for segment in body.split('&') {
        if segment.is_empty() {
            continue;
        }
        if segment.contains(';') {
            return Err(FormError::Malformed(
                "invalid semicolon separator in query".to_string(),
            ));
        }

        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        pairs.push((unescape(key)?, unescape(value)?));
    }

    Ok(pairs)
}

/// Maps parsed pairs onto the ticket form. The last value of a repeated
/// key wins.
pub fn decode_fields(pairs: Vec<(String, String)>) -> Result<TicketForm, FormError> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.insert(key, Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| FormError::Decode(e.to_string()))
}

/// Whether a request content type should be parsed as a form body.
/// A missing content type is accepted.
pub fn is_form_content_type(content_type: Option<&str>) -> bool {
    match content_type {
        None => true,
        Some(ct) => ct
            .split(';')
            .next()
            .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
            .unwrap_or(false),
    }
}

fn unescape(raw: &str) -> Result<String, FormError> {
    let bytes = raw.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let valid = i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();
        if !valid {
            let end = (i + 3).min(bytes.len());
            return Err(FormError::Malformed(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(&bytes[i..end])
            )));
        }
    }

    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8(decoded.into_owned())
        .map_err(|e| FormError::Malformed(format!("invalid UTF-8 in form field: {}", e)))
}
