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

//! Stepview Engine - trace navigation and line indexing core
//!
//! This crate holds the viewer's logic, kept free of any display machinery
//! so a frontend shell can drive it and a test can exercise it directly:
//!
//! - [`TraceStore`]: loads a recorded trace, filters out steps whose source
//!   files are inaccessible, and navigates the surviving sequence.
//! - [`LineOffsetTable`]: per-file byte offset table mapping line numbers to
//!   the half-open span each line occupies in the file's text.
//! - [`ViewSession`]: ties the two together at the display boundary, caching
//!   the offset table for the active file and reporting per-step view frames.

mod config;
mod error;
mod index;
mod session;
mod store;

pub use config::{PayloadFormat, ViewerConfig};
pub use error::{EmptyTraceError, LineOutOfRangeError, LoadError, SessionError, StepFault};
pub use index::LineOffsetTable;
pub use session::{PanelContent, ViewFrame, ViewSession};
pub use store::TraceStore;
