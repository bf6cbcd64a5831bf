// Stepview - Recorded Execution Trace Viewer
// Copyright (C) 2026 The Stepview Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One recorded execution event in a trace.
///
/// A step ties a source location (`file`, `line`) to the input and output
/// payloads captured at that point by the instrumentation process. Payloads
/// are arbitrary structured data; an absent payload (`None`) is a distinct
/// state from a payload that happens to serialize to an empty structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Path to the source file active at this step, as recorded in the trace
    #[serde(rename = "filename")]
    pub file: PathBuf,
    /// 1-based line number within the source file
    #[serde(rename = "lineno")]
    pub line: u32,
    /// Captured input payload, present only if the instrumentation recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    /// Captured output payload, present only if the instrumentation recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

impl TraceStep {
    /// Create a step with no captured payloads
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self { file: file.into(), line, input: None, output: None }
    }

    /// Whether any payload was captured at this step
    pub fn has_payloads(&self) -> bool {
        self.input.is_some() || self.output.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_wire_field_names() {
        let step: TraceStep =
            serde_json::from_value(json!({"filename": "a.py", "lineno": 3})).unwrap();

        assert_eq!(step.file, PathBuf::from("a.py"));
        assert_eq!(step.line, 3);
        assert!(step.input.is_none());
        assert!(step.output.is_none());
    }

    #[test]
    fn absent_payload_differs_from_empty_payload() {
        let absent: TraceStep =
            serde_json::from_value(json!({"filename": "a.py", "lineno": 1})).unwrap();
        let empty: TraceStep =
            serde_json::from_value(json!({"filename": "a.py", "lineno": 1, "input": {}})).unwrap();

        assert!(absent.input.is_none());
        assert_eq!(empty.input, Some(json!({})));
        assert_ne!(absent, empty);
    }

    #[test]
    fn ignores_unknown_keys() {
        let step: TraceStep = serde_json::from_value(json!({
            "filename": "a.py",
            "lineno": 1,
            "thread": "main",
        }))
        .unwrap();

        assert_eq!(step.line, 1);
    }

    #[test]
    fn nested_payloads_survive_round_trip() {
        let step: TraceStep = serde_json::from_value(json!({
            "filename": "a.py",
            "lineno": 7,
            "input": {"args": [1, 2, {"k": null}]},
            "output": ["ok", true],
        }))
        .unwrap();

        let back: TraceStep =
            serde_json::from_value(serde_json::to_value(&step).unwrap()).unwrap();
        assert_eq!(step, back);
    }
}
