//! Domain Entities
//!
//! - Envelope: Inbound webhook body and its event variants
//! - Page / Component / Incident / Maintenance: Statuspage payload models
//! - Notification: Outbound Discord message

mod component;
mod envelope;
mod incident;
mod maintenance;
mod notification;
mod page;

pub use component::*;
pub use envelope::*;
pub use incident::*;
pub use maintenance::*;
pub use notification::*;
pub use page::*;
