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

//! Test utilities for building on-disk trace fixtures.
//!
//! Viewer tests need a trace file plus the source files it references. The
//! fixture owns a temporary directory holding both, so tests can hand real
//! paths to the loader and let everything clean up on drop.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory with source files and a trace file referencing them.
#[derive(Debug)]
pub struct TraceFixture {
    dir: TempDir,
}

impl TraceFixture {
    /// Create an empty fixture directory
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("failed to create fixture directory") }
    }

    /// The fixture's root directory
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a source file with the given content, returning its path
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write fixture source file");
        path
    }

    /// Write a trace file from raw JSON step values, returning its path
    ///
    /// Takes raw values rather than typed steps so tests can also produce
    /// malformed records.
    pub fn write_trace(&self, steps: &[Value]) -> PathBuf {
        let path = self.dir.path().join("trace.json");
        let body = serde_json::to_string_pretty(&steps).expect("failed to serialize trace");
        fs::write(&path, body).expect("failed to write fixture trace file");
        path
    }

    /// Write arbitrary bytes as the trace file, for malformed-input tests
    pub fn write_raw_trace(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("trace.json");
        fs::write(&path, content).expect("failed to write fixture trace file");
        path
    }

    /// A JSON step record referencing a file in this fixture
    pub fn step(&self, name: &str, line: u32) -> Value {
        serde_json::json!({
            "filename": self.dir.path().join(name),
            "lineno": line,
        })
    }
}

impl Default for TraceFixture {
    fn default() -> Self {
        Self::new()
    }
}
