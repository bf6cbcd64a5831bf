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

//! Typed errors for the viewer core.
//!
//! Startup failures (`LoadError`, `EmptyTraceError`) are fatal: no session
//! is created. Per-step faults (`StepFault`) are not: the session reports
//! them on the affected frame and navigation stays usable.

use std::path::PathBuf;

use thiserror::Error;

/// The trace file could not be read or did not parse as a step sequence.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The trace file is missing or unreadable
    #[error("failed to read trace file {path}")]
    Read {
        /// Path of the trace file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The trace file is not a JSON array of step objects
    #[error("trace file {path} is malformed")]
    Parse {
        /// Path of the trace file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// No step survived load-time filtering, so there is nothing to view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trace contains no steps whose source files are accessible")]
pub struct EmptyTraceError;

/// A line number points past the end of its file's current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line {line} is out of range (file has {line_count} lines)")]
pub struct LineOutOfRangeError {
    /// The requested 1-based line number
    pub line: u32,
    /// Number of lines in the indexed text
    pub line_count: usize,
}

/// A non-fatal, per-step data-consistency fault.
///
/// Either the trace is stale relative to an edited source file, or a source
/// file disappeared after load-time filtering. The step's payloads remain
/// viewable and navigation continues.
#[derive(Debug, Error)]
pub enum StepFault {
    /// The step's source file could not be read
    #[error("failed to read source file {path}")]
    SourceUnreadable {
        /// Path of the source file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The step's line number exceeds the file's current line count
    #[error(transparent)]
    LineOutOfRange(#[from] LineOutOfRangeError),
}

/// A viewing session could not be started.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The trace file failed to load
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The trace loaded but holds no viewable steps
    #[error(transparent)]
    EmptyTrace(#[from] EmptyTraceError),
}
