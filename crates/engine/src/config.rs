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

//! Configuration for the viewer core.
//!
//! Covers the two knobs a session honors: how captured payloads are
//! serialized for the side panels, and which local source roots recorded
//! paths may be re-rooted under.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use stepview_common::SourceResolver;

/// Serialization format for payload panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// Render payloads as YAML
    #[default]
    Yaml,
    /// Render payloads as pretty-printed JSON
    Json,
}

/// Viewer configuration, loaded from a TOML file or defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Format used when serializing payloads for display
    pub payload_format: PayloadFormat,
    /// Local directories recorded source paths may be re-rooted under
    pub source_roots: Vec<PathBuf>,
}

impl ViewerConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error, since silently ignoring a user's config hides typos.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(config = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .wrap_err_with(|| format!("failed to parse config file {}", path.display()))?;

        info!(config = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Build the source resolver implied by `source_roots`
    pub fn resolver(&self) -> SourceResolver {
        SourceResolver::new(self.source_roots.clone())
    }
}
