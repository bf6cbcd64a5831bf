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

//! The viewing session: everything a display shell needs per step.
//!
//! The session sits at the boundary the shell talks to. It owns the loaded
//! store, keeps the offset table cached for the file currently on screen,
//! and turns the current step into a [`ViewFrame`]: the highlight range for
//! the active line plus the payload panel contents. Rendering itself stays
//! in the shell.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use stepview_common::types::TraceStep;

use crate::{
    config::{PayloadFormat, ViewerConfig},
    error::{EmptyTraceError, SessionError, StepFault},
    index::LineOffsetTable,
    store::TraceStore,
};

/// What a payload side panel shows for one step.
///
/// `Absent` means the instrumentation captured nothing: the panel goes
/// blank. A payload that serializes to an empty structure still renders as
/// `Text` (e.g. `{}`), keeping the two states visually and semantically
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    /// No payload was captured; the panel shows its blank state
    Absent,
    /// The payload serialized for display
    Text(String),
}

impl PanelContent {
    /// Whether the panel shows the blank state
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Everything the shell needs to display the current step.
#[derive(Debug)]
pub struct ViewFrame {
    /// The step being displayed
    pub step: TraceStep,
    /// Byte range of the active line in the active file's text, terminator
    /// included; `None` when `fault` explains why no highlight is possible
    pub highlight: Option<(usize, usize)>,
    /// Non-fatal fault for this step, if any
    pub fault: Option<StepFault>,
    /// Input panel content
    pub input: PanelContent,
    /// Output panel content
    pub output: PanelContent,
}

/// One viewing session over one trace file.
///
/// Single-threaded and synchronous: every operation is a short, one-shot
/// read triggered by a navigation action. The only mutable state is the
/// store's cursor and the cached offset table for the active file.
#[derive(Debug)]
pub struct ViewSession {
    store: TraceStore,
    config: ViewerConfig,
    /// File whose offset table is currently cached
    active_file: Option<PathBuf>,
    table: LineOffsetTable,
    rebuilds: u64,
}

impl ViewSession {
    /// Open a session over the given trace file.
    ///
    /// Loads and filters the trace eagerly. A trace whose every step was
    /// filtered out is a startup failure, not an empty viewer: there would
    /// be nothing to show.
    pub fn open(trace_path: &Path, config: ViewerConfig) -> Result<Self, SessionError> {
        let store = TraceStore::load(trace_path, &config.resolver())?;
        if store.is_empty() {
            error!(trace_file = %trace_path.display(), "no viewable steps in trace");
            return Err(EmptyTraceError.into());
        }

        info!(trace_file = %trace_path.display(), steps = store.len(), "session opened");
        Ok(Self {
            store,
            config,
            active_file: None,
            table: LineOffsetTable::default(),
            rebuilds: 0,
        })
    }

    /// Produce the frame for the current step.
    ///
    /// The offset table is rebuilt only when the step's file differs from
    /// the one last displayed. Source reads that fail here (a file deleted
    /// after load-time filtering) and stale line numbers are reported as
    /// per-step faults on the frame; the session stays navigable.
    pub fn frame(&mut self) -> Result<ViewFrame, EmptyTraceError> {
        let step = self.store.current()?.clone();
        let mut fault = None;

        if self.active_file.as_deref() != Some(step.file.as_path()) {
            match fs::read_to_string(&step.file) {
                Ok(text) => {
                    self.table = LineOffsetTable::build(&text);
                    self.active_file = Some(step.file.clone());
                    self.rebuilds += 1;
                    debug!(
                        file = %step.file.display(),
                        lines = self.table.line_count(),
                        "offset table rebuilt"
                    );
                }
                Err(source) => {
                    // Drop the stale cache so the next frame retries the read
                    self.table = LineOffsetTable::default();
                    self.active_file = None;
                    warn!(file = %step.file.display(), %source, "source file unreadable");
                    fault =
                        Some(StepFault::SourceUnreadable { path: step.file.clone(), source });
                }
            }
        }

        let highlight = match &fault {
            Some(_) => None,
            None => match self.table.range_for(step.line) {
                Ok(range) => Some(range),
                Err(err) => {
                    warn!(file = %step.file.display(), line = step.line, %err, "stale line number");
                    fault = Some(err.into());
                    None
                }
            },
        };

        let input = self.render_payload(step.input.as_ref());
        let output = self.render_payload(step.output.as_ref());

        Ok(ViewFrame { step, highlight, fault, input, output })
    }

    /// The step at the cursor, without any display work
    pub fn current_step(&self) -> Result<&TraceStep, EmptyTraceError> {
        self.store.current()
    }

    /// The cached highlight range for `step`, if its file is the active one.
    ///
    /// Pure query against the cached table; never reads the filesystem.
    pub fn line_range(&self, step: &TraceStep) -> Option<(usize, usize)> {
        if self.active_file.as_deref() != Some(step.file.as_path()) {
            return None;
        }
        self.table.range_for(step.line).ok()
    }

    /// Move one step forward, clamping at the last step
    pub fn advance(&mut self) {
        self.store.advance();
    }

    /// Move one step backward, clamping at the first step
    pub fn retreat(&mut self) {
        self.store.retreat();
    }

    /// Current cursor position, for shells avoiding redundant re-renders
    pub fn cursor(&self) -> usize {
        self.store.cursor()
    }

    /// Number of steps in the session
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the session has no steps (never true after a successful open)
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// How many offset-table rebuilds this session has performed
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn render_payload(&self, payload: Option<&Value>) -> PanelContent {
        let Some(value) = payload else {
            return PanelContent::Absent;
        };

        let rendered = match self.config.payload_format {
            PayloadFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            PayloadFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| e.to_string())
            }
        };

        match rendered {
            Ok(text) => PanelContent::Text(text),
            Err(err) => {
                error!(%err, "failed to serialize payload for display");
                PanelContent::Text(format!("<unrenderable payload: {err}>"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stepview_common::test_utils::TraceFixture;

    fn open_session(fixture: &TraceFixture, steps: &[serde_json::Value]) -> ViewSession {
        let path = fixture.write_trace(steps);
        ViewSession::open(&path, ViewerConfig::default()).unwrap()
    }

    #[test]
    fn empty_trace_is_fatal_at_open() {
        let fixture = TraceFixture::new();
        let path = fixture.write_trace(&[json!({"filename": "/nonexistent/a.py", "lineno": 1})]);

        let err = ViewSession::open(&path, ViewerConfig::default()).unwrap_err();
        assert!(matches!(err, SessionError::EmptyTrace(_)));
    }

    #[test]
    fn frame_highlights_the_active_line() {
        let fixture = TraceFixture::new();
        fixture.write_source("a.py", "x = 1\ny = 2\n");
        let mut session =
            open_session(&fixture, &[fixture.step("a.py", 1), fixture.step("a.py", 2)]);

        let frame = session.frame().unwrap();
        assert_eq!(frame.highlight, Some((0, 6)));
        assert!(frame.fault.is_none());

        session.advance();
        let frame = session.frame().unwrap();
        assert_eq!(frame.highlight, Some((6, 12)));
    }

    #[test]
    fn table_rebuilds_only_on_file_change() {
        let fixture = TraceFixture::new();
        fixture.write_source("a.py", "x = 1\ny = 2\n");
        fixture.write_source("b.py", "z = 3\n");
        let mut session = open_session(
            &fixture,
            &[fixture.step("a.py", 1), fixture.step("a.py", 2), fixture.step("b.py", 1)],
        );

        session.frame().unwrap();
        assert_eq!(session.rebuild_count(), 1);

        session.advance();
        session.frame().unwrap();
        assert_eq!(session.rebuild_count(), 1);

        session.advance();
        session.frame().unwrap();
        assert_eq!(session.rebuild_count(), 2);
    }

    #[test]
    fn stale_line_number_is_a_nonfatal_fault() {
        let fixture = TraceFixture::new();
        fixture.write_source("a.py", "x = 1\n");
        let mut session =
            open_session(&fixture, &[fixture.step("a.py", 99), fixture.step("a.py", 1)]);

        let frame = session.frame().unwrap();
        assert!(frame.highlight.is_none());
        assert!(matches!(frame.fault, Some(StepFault::LineOutOfRange(_))));

        // Later steps remain viewable
        session.advance();
        let frame = session.frame().unwrap();
        assert_eq!(frame.highlight, Some((0, 6)));
        assert!(frame.fault.is_none());
    }

    #[test]
    fn vanished_source_file_is_a_nonfatal_fault() {
        let fixture = TraceFixture::new();
        let a = fixture.write_source("a.py", "x = 1\n");
        fixture.write_source("b.py", "y = 2\n");
        let mut session =
            open_session(&fixture, &[fixture.step("a.py", 1), fixture.step("b.py", 1)]);

        std::fs::remove_file(&a).unwrap();

        let frame = session.frame().unwrap();
        assert!(frame.highlight.is_none());
        assert!(matches!(frame.fault, Some(StepFault::SourceUnreadable { .. })));

        session.advance();
        let frame = session.frame().unwrap();
        assert_eq!(frame.highlight, Some((0, 6)));
    }

    #[test]
    fn absent_payload_is_blank_but_empty_payload_is_not() {
        let fixture = TraceFixture::new();
        fixture.write_source("a.py", "x = 1\n");
        let path = fixture.write_trace(&[json!({
            "filename": fixture.root().join("a.py"),
            "lineno": 1,
            "input": {},
        })]);
        let mut session = ViewSession::open(&path, ViewerConfig::default()).unwrap();

        let frame = session.frame().unwrap();
        assert!(frame.output.is_absent());
        match &frame.input {
            PanelContent::Text(text) => assert!(!text.trim().is_empty()),
            PanelContent::Absent => panic!("explicit empty payload must not render as absent"),
        }
    }

    #[test]
    fn json_payload_format_is_honored() {
        let fixture = TraceFixture::new();
        fixture.write_source("a.py", "x = 1\n");
        let path = fixture.write_trace(&[json!({
            "filename": fixture.root().join("a.py"),
            "lineno": 1,
            "input": {"k": [1, 2]},
        })]);
        let config = ViewerConfig { payload_format: PayloadFormat::Json, ..Default::default() };
        let mut session = ViewSession::open(&path, config).unwrap();

        let frame = session.frame().unwrap();
        let PanelContent::Text(text) = frame.input else {
            panic!("expected rendered payload");
        };
        assert!(serde_json::from_str::<Value>(&text).is_ok());
    }

    #[test]
    fn line_range_is_a_pure_cached_query() {
        let fixture = TraceFixture::new();
        fixture.write_source("a.py", "x = 1\ny = 2\n");
        let mut session = open_session(&fixture, &[fixture.step("a.py", 2)]);

        let step = session.current_step().unwrap().clone();
        // Nothing displayed yet, so no cached table for the file
        assert_eq!(session.line_range(&step), None);

        session.frame().unwrap();
        assert_eq!(session.line_range(&step), Some((6, 12)));
    }
}
