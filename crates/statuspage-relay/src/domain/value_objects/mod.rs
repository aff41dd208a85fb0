//! Value Objects
//!
//! Immutable value types with no identity.

mod embed_color;
mod event_kind;

pub use embed_color::*;
pub use event_kind::*;
