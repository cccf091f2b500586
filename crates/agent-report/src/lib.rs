//! Renders the outcome of a completed agent run in the terminal.
//!
//! Runs are exchanged as JSON records (see [`run_schema`]). The crate
//! includes a CLI tool for printing reports of recorded runs. And you can
//! also use it as a library to report runs produced by your own agent
//! loop, through [`core::RunRecorder`].

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod error;
mod load;
mod tools;

pub use error::LoadError;
pub use load::{load_run, load_run_from_reader, run_schema};
pub use tools::tool_names;

/// Re-exports of [`agent_report_core`] crate.
pub mod core {
    pub use agent_report_core::*;
}

/// Re-exports of [`agent_report_model`] crate.
pub mod model {
    pub use agent_report_model::*;
}
