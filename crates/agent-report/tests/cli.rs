use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const RECORD: &str = r#"{
    "question": "What is six times seven?",
    "model_name": "gpt-4o-mini",
    "messages": [
        { "content": "What is six times seven?" },
        {
            "tool_calls": [{ "id": "t1", "name": "multiply" }],
            "usage": { "input_tokens": 20, "output_tokens": 5, "total_tokens": 25 }
        },
        { "content": "42" }
    ],
    "tools": [{ "name": "multiply" }, { "name": "add" }]
}"#;

fn agent_report(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_agent-report"))
        .args(args)
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_render_from_stdin() {
    let output = agent_report(&["render"], Some(RECORD));
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("🔧 Model: gpt-4o-mini\n"));
    assert!(stdout.contains("❓ Question:\n   What is six times seven?\n"));
    assert!(stdout.contains("💬 Answer:\n   42\n"));
    assert!(stdout.contains("   • Total tokens: 25\n"));
    assert!(stdout.contains("   • Tool calls made: 1\n"));
    assert!(stdout.contains("   • Total messages: 3\n"));
    // Piped stdout is not a terminal.
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_render_dash_reads_stdin() {
    let output = agent_report(&["render", "-", "--plain"], Some(RECORD));
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("💬 Answer:\n   42\n"));
}

#[test]
fn test_render_overrides() {
    let output = agent_report(
        &["render", "--question", "Six by seven?", "--model", "local"],
        Some(RECORD),
    );
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("🔧 Model: local\n"));
    assert!(stdout.contains("❓ Question:\n   Six by seven?\n"));
    assert!(!stdout.contains("gpt-4o-mini"));
}

#[test]
fn test_render_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RECORD.as_bytes()).unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let output = agent_report(&["render", path], None);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("💬 Answer:\n   42\n"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let output =
        agent_report(&["render", missing.to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("missing.json"));
}

#[test]
fn test_positional_record_fails() {
    let output = agent_report(
        &["render", "--plain"],
        Some(r#"["What?", "m", [{"content": "42"}]]"#),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_tools() {
    let output = agent_report(&["tools"], Some(RECORD));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "multiply\nadd\n");
}

#[test]
fn test_schema() {
    let output = agent_report(&["schema"], None);
    assert!(output.status.success());

    let schema: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"].get("messages").is_some());
}
