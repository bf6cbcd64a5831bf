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

//! Stepview Common - Shared functionality for stepview components
//!
//! This crate provides the data model shared by the viewer core and any
//! frontend shells: trace steps, the trace sequence itself, source path
//! resolution, and logging setup.

/// Common types used throughout stepview, including trace steps and the trace sequence
pub mod types;

/// Logging setup and utilities for consistent logging across stepview components
pub mod logging;
/// Source path resolution for traces recorded on a different machine or checkout
pub mod resolve;
/// Test utilities shared by unit and integration tests
pub mod test_utils;

pub use logging::*;
pub use resolve::*;
