//! Domain Services
//!
//! Stateless operations over domain entities.

mod notification_formatter;

pub use notification_formatter::*;
