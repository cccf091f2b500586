use agent_report_model::Run;

/// Returns the names of the tools available to the agent.
///
/// Runs recorded without tool metadata fall back to the tools that were
/// actually called, in the order they were first called.
pub fn tool_names(run: &Run) -> Vec<&str> {
    if !run.tools.is_empty() {
        return run.tools.iter().map(|tool| tool.name.as_str()).collect();
    }

    let mut names: Vec<&str> = Vec::new();
    let called = run.messages.iter().flat_map(|msg| &msg.tool_calls);
    for call in called {
        if !names.contains(&call.name.as_str()) {
            names.push(&call.name);
        }
    }
    names
}
