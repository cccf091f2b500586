use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use agent_report_model::Run;
use schemars::schema_for;
use serde::de::{Error as _, Unexpected};
use serde_json::Value;

use crate::LoadError;

/// Loads a run record from a JSON file.
pub fn load_run<P: AsRef<Path>>(path: P) -> Result<Run, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!("loading run record from `{}`", path.display());
    load_run_from_reader(BufReader::new(file))
}

/// Loads a run record from any reader yielding JSON.
///
/// The record must be a JSON object; positional (array) forms are
/// rejected.
pub fn load_run_from_reader<R: Read>(reader: R) -> Result<Run, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    if !value.is_object() {
        let unexpected = match &value {
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::String(s) => Unexpected::Str(s),
            Value::Array(_) => Unexpected::Seq,
            Value::Object(_) => Unexpected::Map,
        };
        return Err(LoadError::Parse(serde_json::Error::invalid_type(
            unexpected,
            &"a run record object",
        )));
    }

    let run: Run = serde_json::from_value(value)?;
    trace!(
        messages = run.messages.len(),
        tools = run.tools.len(),
        "run record loaded"
    );
    Ok(run)
}

/// Returns the JSON schema of run records.
#[inline]
pub fn run_schema() -> Value {
    schema_for!(Run).to_value()
}
