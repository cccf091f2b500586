//! Turns a completed agent run into a human-readable report.
//!
//! The flow is always the same: a [`Run`](agent_report_model::Run) comes
//! from the agent-execution side (possibly assembled by a [`RunRecorder`]),
//! [`build_report`] extracts its outcome, and a [`Renderer`] prints it.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod recorder;
mod render;
mod report;

pub use recorder::RunRecorder;
pub use render::{RenderConfig, RenderConfigBuilder, Renderer, print_report};
pub use report::{Report, build_report};
