pub mod config;
pub mod metrics;
pub mod printer;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config, ConfigError,
    SanitizedConfig, ServerConfig, StaticFilesConfig,
};
pub use printer::{CommandPrinter, PrintOutput, PrintRequest, Printer, PrinterConfig, PrinterError};
pub use ticket::{
    compute_deadline, decode_ticket_form, Clock, Deadline, FormError, SystemClock, Ticket,
    TicketForm,
};
