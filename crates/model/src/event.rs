use serde::{Deserialize, Serialize};

use crate::{ToolCallRecord, UsageMetadata};

/// An event streamed by the agent-execution side while a run is in
/// progress.
///
/// Events are folded into [`Message`](crate::Message)s by a recorder; the
/// reporting side never sees them directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RunEvent {
    /// The user sent an input.
    UserInput(String),
    /// Received a text delta of the current assistant turn.
    MessageDelta(String),
    /// The assistant requested a tool call in the current turn.
    ToolCall(ToolCallRecord),
    /// The model reported token usage for the current turn.
    Usage(UsageMetadata),
    /// A tool call has finished.
    ToolResult {
        /// The identifier of the tool call request.
        id: String,
        /// The output of the tool.
        content: String,
    },
    /// The current assistant turn has been completed.
    TurnCompleted,
}
