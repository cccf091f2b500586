//! A scripted fake agent for testing purpose.

mod preset;

use agent_report_model::{RunEvent, ToolInfo};

pub use preset::*;

#[derive(Clone, Debug)]
enum ScriptStep {
    UserInput(String),
    AssistantTurn(PresetTurn),
    ToolResult { id: String, content: String },
}

/// A fake agent that replays a fixed script.
///
/// Before replaying, you need to setup the script, which is what the user
/// says, how the assistant responds and what the tools return. Replaying
/// yields the same events a real agent loop would stream, in script order.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: Vec<ScriptStep>,
    tools: Vec<ToolInfo>,
}

impl ScriptedAgent {
    #[inline]
    pub fn add_user_input<S: Into<String>>(&mut self, input: S) {
        self.script.push(ScriptStep::UserInput(input.into()));
    }

    #[inline]
    pub fn add_assistant_turn(&mut self, turn: PresetTurn) {
        self.script.push(ScriptStep::AssistantTurn(turn));
    }

    #[inline]
    pub fn add_tool_result<ID: Into<String>, S: Into<String>>(
        &mut self,
        id: ID,
        content: S,
    ) {
        self.script.push(ScriptStep::ToolResult {
            id: id.into(),
            content: content.into(),
        });
    }

    #[inline]
    pub fn add_tool(&mut self, tool: ToolInfo) {
        self.tools.push(tool);
    }

    /// Returns the tools this agent exposes.
    #[inline]
    pub fn tools(&self) -> &[ToolInfo] {
        &self.tools
    }

    /// Replays the script as a stream of events.
    pub fn events(&self) -> Vec<RunEvent> {
        let mut events = Vec::new();
        for step in &self.script {
            match step {
                ScriptStep::UserInput(input) => {
                    events.push(RunEvent::UserInput(input.clone()));
                }
                ScriptStep::AssistantTurn(turn) => {
                    events.extend(turn.events.iter().map(|event| match event {
                        PresetEvent::MessageDelta(delta) => {
                            RunEvent::MessageDelta(delta.clone())
                        }
                        PresetEvent::ToolCall(call) => {
                            RunEvent::ToolCall(call.clone())
                        }
                    }));
                    if let Some(usage) = turn.usage {
                        events.push(RunEvent::Usage(usage));
                    }
                    events.push(RunEvent::TurnCompleted);
                }
                ScriptStep::ToolResult { id, content } => {
                    events.push(RunEvent::ToolResult {
                        id: id.clone(),
                        content: content.clone(),
                    });
                }
            }
        }
        events
    }
}
