use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Message;

/// One complete execution of an agent, from the user's prompt to the final
/// answer.
///
/// A `Run` is always fully materialized: the messages are the whole
/// history in chronological order, and nothing is appended after the run
/// is handed over for reporting.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct Run {
    /// The original user prompt.
    #[serde(default)]
    pub question: String,
    /// Identifier of the model that drove the run.
    #[serde(default)]
    pub model_name: String,
    /// Messages of the run, oldest first.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Tools that were exposed to the agent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolInfo>,
}

impl Run {
    /// Creates an empty run for the given prompt and model.
    #[inline]
    pub fn new<Q, M>(question: Q, model: M) -> Self
    where
        Q: Into<String>,
        M: Into<String>,
    {
        Self {
            question: question.into(),
            model_name: model.into(),
            ..Default::default()
        }
    }

    /// Sets the messages of the run.
    #[inline]
    pub fn with_messages(mut self, messages: impl Into<Vec<Message>>) -> Self {
        self.messages = messages.into();
        self
    }

    /// Sets the tools that were exposed to the agent.
    #[inline]
    pub fn with_tools(mut self, tools: impl Into<Vec<ToolInfo>>) -> Self {
        self.tools = tools.into();
        self
    }
}

/// Describes a tool exposed to the agent by the tool-calling adapter.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolInfo {
    /// Creates a tool description with only a name.
    #[inline]
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
