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

use std::ops::Deref;

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::types::TraceStep;

/// An ordered recording of program execution steps.
///
/// The sequence is immutable once loaded; navigation over it only moves a
/// cursor, never the entries themselves. On the wire this is a plain JSON
/// array of step objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, From)]
#[serde(transparent)]
pub struct Trace {
    inner: Vec<TraceStep>,
}

impl Deref for Trace {
    type Target = Vec<TraceStep>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Trace {
    /// Create a new empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step to this trace
    pub fn push(&mut self, step: TraceStep) {
        self.inner.push(step);
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the trace is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the step at `index`, if any
    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.inner.get(index)
    }
}

impl IntoIterator for Trace {
    type Item = TraceStep;
    type IntoIter = std::vec::IntoIter<TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl FromIterator<TraceStep> for Trace {
    fn from_iter<T: IntoIterator<Item = TraceStep>>(iter: T) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}
