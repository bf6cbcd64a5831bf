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

//! Source path resolution for recorded traces.
//!
//! Traces carry the file paths of the machine they were recorded on. When a
//! trace is viewed against a different checkout, the recorded paths no longer
//! exist verbatim; the resolver re-roots them under configured source roots
//! before the viewer gives up on a step.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Maps recorded source paths to paths that exist on the local filesystem.
///
/// Resolution tries the recorded path verbatim first, then the recorded
/// path's file name under each configured source root, in order. The first
/// candidate that exists wins.
#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    roots: Vec<PathBuf>,
}

impl SourceResolver {
    /// Create a resolver with the given source roots
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Resolve a recorded path to an existing local path, if any
    pub fn resolve(&self, recorded: &Path) -> Option<PathBuf> {
        for candidate in self.candidates(recorded) {
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        debug!(recorded = %recorded.display(), "source path did not resolve");
        None
    }

    /// All paths resolution would try for `recorded`, in order
    pub fn candidates(&self, recorded: &Path) -> impl Iterator<Item = PathBuf> + '_ {
        let verbatim = std::iter::once(recorded.to_path_buf());
        let name = recorded.file_name().map(PathBuf::from);
        let rerooted = self
            .roots
            .iter()
            .filter_map(move |root| name.clone().map(|n| root.join(n)));

        verbatim.chain(rerooted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_verbatim_path_first() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.py");
        fs::write(&file, "x = 1\n").unwrap();

        let resolver = SourceResolver::default();
        assert_eq!(resolver.resolve(&file), Some(file));
    }

    #[test]
    fn reroots_missing_path_under_source_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("mod.py"), "x = 1\n").unwrap();

        let resolver = SourceResolver::new(vec![dir.path().to_path_buf()]);
        let resolved = resolver.resolve(Path::new("/recorded/elsewhere/mod.py"));

        assert_eq!(resolved, Some(dir.path().join("mod.py")));
    }

    #[test]
    fn missing_everywhere_resolves_to_none() {
        let dir = TempDir::new().unwrap();
        let resolver = SourceResolver::new(vec![dir.path().to_path_buf()]);

        assert_eq!(resolver.resolve(Path::new("/nowhere/gone.py")), None);
    }

    #[test]
    fn roots_are_tried_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("a.py"), "first\n").unwrap();
        fs::write(second.path().join("a.py"), "second\n").unwrap();

        let resolver =
            SourceResolver::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        let resolved = resolver.resolve(Path::new("/recorded/a.py"));

        assert_eq!(resolved, Some(first.path().join("a.py")));
    }
}
