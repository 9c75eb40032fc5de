//! Storage tickets: form decoding and deadline computation.

mod clock;
mod deadline;
mod form;
mod types;

pub use clock::{Clock, SystemClock};
pub use deadline::{
    compute_deadline, expiration_date, first_sunday_of_month, Deadline, EXPIRE_DATE_FORMAT,
    SUBMIT_TIME_FORMAT,
};
pub use form::{
    decode_fields, decode_ticket_form, is_form_content_type, parse_form, FormError,
    FORM_CONTENT_TYPE,
};
pub use types::{Ticket, TicketForm};
