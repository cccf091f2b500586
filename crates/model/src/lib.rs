//! The data model of a completed agent run.
//!
//! Everything in this crate is produced by the agent-execution side (an
//! agent loop, a tool-calling adapter, a recorder) and consumed read-only
//! by the reporting side. Types here carry no behavior beyond small
//! accessors and constructors.
//!
//! Presence is explicit: a message without text has `content: None`, a
//! message without token accounting has `usage: None`. The serialized form
//! omits absent fields, so run records written by other tools only need
//! the parts they actually know.

#![deny(missing_docs)]

mod event;
mod message;
mod run;

pub use event::*;
pub use message::*;
pub use run::*;
