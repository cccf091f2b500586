use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One turn's record within a run: assistant text, a tool-call request,
/// a tool result, or the user's input.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct Message {
    /// The text of the message. Absent on pure tool-call messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tool invocations requested in this turn, in request order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRecord>,
    /// Token accounting attached by the model, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageMetadata>,
}

impl Message {
    /// Creates a message that only carries text.
    #[inline]
    pub fn text<S: Into<String>>(content: S) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Creates a message that only requests tool calls.
    #[inline]
    pub fn tool_calls(calls: impl Into<Vec<ToolCallRecord>>) -> Self {
        Self {
            tool_calls: calls.into(),
            ..Default::default()
        }
    }

    /// Attaches usage metadata to the message.
    #[inline]
    pub fn with_usage(mut self, usage: UsageMetadata) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Appends a tool-call record to the message.
    #[inline]
    pub fn with_tool_call(mut self, call: ToolCallRecord) -> Self {
        self.tool_calls.push(call);
        self
    }

    /// Returns `true` if the message carries non-empty text.
    ///
    /// Whitespace-only text still counts as content.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Describes one tool invocation requested by the agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolCallRecord {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The arguments passed to the tool.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub arguments: Value,
}

impl ToolCallRecord {
    /// Creates a record without arguments.
    #[inline]
    pub fn new<ID: Into<String>, N: Into<String>>(id: ID, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: Value::Null,
        }
    }

    /// Sets the arguments of the call.
    #[inline]
    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Token accounting reported by the model for one message.
///
/// Providers don't always report every counter, so each one is optional on
/// its own.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub struct UsageMetadata {
    /// Tokens in the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Tokens generated by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    /// Total tokens billed for the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
}

impl UsageMetadata {
    /// Creates usage metadata with every counter known.
    #[inline]
    pub const fn new(input: u64, output: u64, total: u64) -> Self {
        Self {
            input_tokens: Some(input),
            output_tokens: Some(output),
            total_tokens: Some(total),
        }
    }

    /// Returns `true` if no counter is known.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input_tokens.is_none()
            && self.output_tokens.is_none()
            && self.total_tokens.is_none()
    }
}
