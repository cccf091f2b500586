use agent_report_model::{Message, Run, UsageMetadata};

/// The outcome of one agent run.
///
/// A report is built fresh from a complete run and never changes
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    final_answer: Option<String>,
    tool_call_count: usize,
    usage: Option<UsageMetadata>,
    message_count: usize,
}

impl Report {
    /// Builds a report from the messages of a run, oldest first.
    pub fn from_messages(messages: &[Message]) -> Self {
        // Runs end on the answer message, so the newest non-empty content
        // is the answer.
        let final_answer = messages
            .iter()
            .rev()
            .find(|msg| msg.has_content())
            .and_then(|msg| msg.content.clone());

        let mut tool_call_count = 0;
        let mut usage = None;
        for msg in messages {
            tool_call_count += msg.tool_calls.len();
            // Each usage-bearing message replaces the previous one, the
            // counters are not summed.
            if let Some(msg_usage) = msg.usage {
                usage = Some(msg_usage);
            }
        }

        Self {
            final_answer,
            tool_call_count,
            usage,
            message_count: messages.len(),
        }
    }

    /// Returns the final answer of the run, if any message has content.
    #[inline]
    pub fn final_answer(&self) -> Option<&str> {
        self.final_answer.as_deref()
    }

    /// Returns the number of tool calls requested over the whole run.
    #[inline]
    pub fn tool_call_count(&self) -> usize {
        self.tool_call_count
    }

    /// Returns the usage metadata of the last message that carries one.
    #[inline]
    pub fn usage(&self) -> Option<&UsageMetadata> {
        self.usage.as_ref()
    }

    /// Returns the number of messages in the run.
    #[inline]
    pub fn message_count(&self) -> usize {
        self.message_count
    }
}

/// Builds the report of a completed run.
pub fn build_report(run: &Run) -> Report {
    let report = Report::from_messages(&run.messages);
    debug!(
        model = %run.model_name,
        messages = report.message_count,
        tool_calls = report.tool_call_count,
        has_answer = report.final_answer.is_some(),
        "built run report"
    );
    report
}

#[cfg(test)]
mod tests {
    use agent_report_model::ToolCallRecord;

    use super::*;

    #[test]
    fn test_empty_run() {
        let report = build_report(&Run::new("Hi", "gpt-4o-mini"));
        assert_eq!(report.final_answer(), None);
        assert_eq!(report.tool_call_count(), 0);
        assert_eq!(report.usage(), None);
        assert_eq!(report.message_count(), 0);
    }

    #[test]
    fn test_tool_call_then_answer() {
        let run = Run::new("What is the answer?", "gpt-4o-mini").with_messages([
            Message::tool_calls([ToolCallRecord::new("t1", "compute")]),
            Message::text("42"),
        ]);
        let report = build_report(&run);
        assert_eq!(report.final_answer(), Some("42"));
        assert_eq!(report.tool_call_count(), 1);
        assert_eq!(report.usage(), None);
        assert_eq!(report.message_count(), 2);
    }

    #[test]
    fn test_last_usage_wins() {
        let run = Run::new("Q", "m").with_messages([
            Message::text("thinking...")
                .with_usage(UsageMetadata::new(5, 0, 5)),
            Message::text("done").with_usage(UsageMetadata::new(5, 3, 8)),
        ]);
        let report = build_report(&run);
        assert_eq!(report.final_answer(), Some("done"));
        assert_eq!(report.tool_call_count(), 0);
        assert_eq!(report.usage(), Some(&UsageMetadata::new(5, 3, 8)));
        assert_eq!(report.message_count(), 2);
    }

    #[test]
    fn test_usage_kept_from_earlier_message() {
        let usage = UsageMetadata {
            input_tokens: Some(7),
            output_tokens: None,
            total_tokens: None,
        };
        let run = Run::new("Q", "m").with_messages([
            Message::tool_calls([ToolCallRecord::new("t1", "search")])
                .with_usage(usage),
            Message::text("result of search"),
            Message::text("final"),
        ]);
        assert_eq!(build_report(&run).usage(), Some(&usage));
    }

    #[test]
    fn test_answer_skips_trailing_empty_messages() {
        let run = Run::new("Q", "m").with_messages([
            Message::text("first"),
            Message::text("answer"),
            Message::text(""),
            Message::default(),
        ]);
        let report = build_report(&run);
        assert_eq!(report.final_answer(), Some("answer"));
        assert_eq!(report.message_count(), 4);
    }

    #[test]
    fn test_no_content_at_all() {
        let run = Run::new("Q", "m").with_messages([
            Message::tool_calls([
                ToolCallRecord::new("t1", "a"),
                ToolCallRecord::new("t2", "b"),
            ]),
            Message::default(),
        ]);
        let report = build_report(&run);
        assert_eq!(report.final_answer(), None);
        assert_eq!(report.tool_call_count(), 2);
    }

    #[test]
    fn test_tool_call_count_ignores_order() {
        let mut messages = vec![
            Message::tool_calls([ToolCallRecord::new("t1", "a")]),
            Message::tool_calls([
                ToolCallRecord::new("t2", "b"),
                ToolCallRecord::new("t3", "c"),
            ]),
            Message::text("between"),
            Message::tool_calls([ToolCallRecord::new("t4", "d")]),
        ];
        let forward = Report::from_messages(&messages).tool_call_count();
        messages.reverse();
        let backward = Report::from_messages(&messages).tool_call_count();
        assert_eq!(forward, 4);
        assert_eq!(forward, backward);
    }
}
