use agent_report_model::{
    Message, Run, RunEvent, ToolCallRecord, ToolInfo, UsageMetadata,
};

/// Folds the events streamed by an agent into a complete [`Run`].
///
/// Assistant output is buffered per turn: text deltas are concatenated,
/// tool calls appended, and the turn becomes one message when it is
/// completed (or when any other message arrives). The recorder is consumed
/// by [`finish`](Self::finish), so a run is never observed half-built.
#[derive(Debug)]
pub struct RunRecorder {
    run: Run,
    open_turn: Option<AssistantTurn>,
}

#[derive(Debug, Default)]
struct AssistantTurn {
    text: String,
    tool_calls: Vec<ToolCallRecord>,
    usage: Option<UsageMetadata>,
}

impl AssistantTurn {
    fn into_message(self) -> Message {
        Message {
            content: (!self.text.is_empty()).then_some(self.text),
            tool_calls: self.tool_calls,
            usage: self.usage,
        }
    }
}

impl RunRecorder {
    /// Creates a recorder for a run answering `question` with `model`.
    #[inline]
    pub fn new<Q, M>(question: Q, model: M) -> Self
    where
        Q: Into<String>,
        M: Into<String>,
    {
        Self {
            run: Run::new(question, model),
            open_turn: None,
        }
    }

    /// Sets the tools exposed to the agent.
    #[inline]
    pub fn with_tools(mut self, tools: impl Into<Vec<ToolInfo>>) -> Self {
        self.run.tools = tools.into();
        self
    }

    /// Records one event.
    pub fn record(&mut self, event: RunEvent) {
        trace!("recording event: {event:?}");
        match event {
            RunEvent::UserInput(input) => {
                self.close_turn();
                self.run.messages.push(Message::text(input));
            }
            RunEvent::MessageDelta(delta) => {
                self.turn().text.push_str(&delta);
            }
            RunEvent::ToolCall(call) => {
                self.turn().tool_calls.push(call);
            }
            RunEvent::Usage(usage) => {
                self.turn().usage = Some(usage);
            }
            RunEvent::ToolResult { id, content } => {
                self.close_turn();
                trace!("tool call `{id}` finished");
                self.run.messages.push(Message::text(content));
            }
            RunEvent::TurnCompleted => {
                if self.open_turn.is_none() {
                    warn!("turn completed without any assistant output");
                }
                self.close_turn();
            }
        }
    }

    /// Returns the number of messages recorded so far, including the turn
    /// that is still open.
    #[inline]
    pub fn message_count(&self) -> usize {
        self.run.messages.len() + usize::from(self.open_turn.is_some())
    }

    /// Closes any open turn and returns the recorded run.
    pub fn finish(mut self) -> Run {
        self.close_turn();
        debug!(messages = self.run.messages.len(), "run recorded");
        self.run
    }

    #[inline]
    fn turn(&mut self) -> &mut AssistantTurn {
        self.open_turn.get_or_insert_with(Default::default)
    }

    fn close_turn(&mut self) {
        if let Some(turn) = self.open_turn.take() {
            self.run.messages.push(turn.into_message());
        }
    }
}

impl Extend<RunEvent> for RunRecorder {
    fn extend<I: IntoIterator<Item = RunEvent>>(&mut self, events: I) {
        for event in events {
            self.record(event);
        }
    }
}
