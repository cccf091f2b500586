use agent_report_model::{ToolCallRecord, UsageMetadata};
use serde::{Deserialize, Serialize};

/// The events in a preset assistant turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetEvent {
    #[serde(rename = "message_delta")]
    MessageDelta(String),
    #[serde(rename = "tool_call")]
    ToolCall(ToolCallRecord),
}

/// The preset output for an assistant turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTurn {
    /// Events in this turn.
    pub events: Vec<PresetEvent>,
    /// Usage reported when the turn ends.
    pub usage: Option<UsageMetadata>,
}

impl PresetTurn {
    /// Creates a `PresetTurn` with the specified events.
    #[inline]
    pub fn with_events(events: impl Into<Vec<PresetEvent>>) -> Self {
        Self {
            events: events.into(),
            usage: None,
        }
    }

    /// Creates a turn that answers with a single text delta.
    #[inline]
    pub fn answer<S: Into<String>>(text: S) -> Self {
        Self::with_events([PresetEvent::MessageDelta(text.into())])
    }

    /// Sets the usage reported at the end of the turn.
    #[inline]
    pub fn with_usage(mut self, usage: UsageMetadata) -> Self {
        self.usage = Some(usage);
        self
    }
}
