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

//! Trace loading and cursor navigation.
//!
//! The store reads the whole trace eagerly, drops steps whose source files
//! cannot be found, and then never touches the filesystem again; navigation
//! is pure cursor movement over the immutable surviving sequence.

use std::{fs, path::Path};

use tracing::{debug, info, trace};

use stepview_common::{
    types::{Trace, TraceStep},
    SourceResolver,
};

use crate::error::{EmptyTraceError, LoadError};

/// A loaded trace plus the cursor navigating it.
///
/// The trace path is an explicit constructor argument; the store's lifetime
/// is one viewing session and the cursor position is never persisted.
#[derive(Debug, Clone)]
pub struct TraceStore {
    trace: Trace,
    cursor: usize,
}

impl TraceStore {
    /// Load a trace file and filter it against the local filesystem.
    ///
    /// A record is retained only if the resolver maps its `filename` to an
    /// existing file; retained steps keep their original order and are
    /// rewritten to the resolved path so later reads use the same location.
    /// Existence is checked once, here, not re-checked per step.
    pub fn load(path: &Path, resolver: &SourceResolver) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;

        let recorded: Trace = serde_json::from_str(&raw)
            .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;

        let total = recorded.len();
        let trace: Trace = recorded
            .into_iter()
            .filter_map(|step| match resolver.resolve(&step.file) {
                Some(resolved) => Some(TraceStep { file: resolved, ..step }),
                None => {
                    debug!(file = %step.file.display(), line = step.line, "dropping step, source file not found");
                    None
                }
            })
            .collect();

        info!(
            trace_file = %path.display(),
            loaded = trace.len(),
            dropped = total - trace.len(),
            "trace loaded"
        );

        Ok(Self { trace, cursor: 0 })
    }

    /// The step at the cursor
    pub fn current(&self) -> Result<&TraceStep, EmptyTraceError> {
        self.trace.get(self.cursor).ok_or(EmptyTraceError)
    }

    /// Move the cursor one step forward, clamping at the last step.
    ///
    /// Total: at the end of the sequence this is a no-op, not an error.
    /// Callers that care whether a move happened compare [`Self::cursor`]
    /// before and after.
    pub fn advance(&mut self) {
        if self.cursor + 1 < self.trace.len() {
            self.cursor += 1;
            trace!(cursor = self.cursor, "advanced");
        }
    }

    /// Move the cursor one step backward, clamping at the first step.
    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            trace!(cursor = self.cursor, "retreated");
        }
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of surviving steps
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Whether no step survived filtering
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// The full surviving step sequence
    pub fn steps(&self) -> &Trace {
        &self.trace
    }
}
