// src/readers/loglocator.rs

//! Implements a [`LogLocator`], the mapping from user-passed score log
//! names to real file paths.
//!
//! The external optimizer writes its logs under one experiment-output root
//! (e.g. `score_logs/all_scores-…`, `best_score_logs/best_scores-…`).
//! That root is injected once, here; nothing else in the pipeline composes
//! paths.
//!
//! [`LogLocator`]: self::LogLocator

use crate::common::{FPath, FPaths, Path, SeriesError, SeriesResult};
use crate::readers::helpers::path_to_fpath;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{defn, defo, defx, defñ};

extern crate walkdir;
use walkdir::WalkDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogLocator
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Locator of score logs relative to a known experiment-output root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogLocator {
    root: FPath,
}

impl LogLocator {
    pub fn new(root: FPath) -> LogLocator {
        LogLocator { root }
    }

    #[inline(always)]
    pub fn root(&self) -> &FPath {
        &self.root
    }

    /// Resolve a user-passed log name to a path.
    ///
    /// Absolute names pass through unchanged; relative names (including
    /// names with subdirectories, `score_logs/all_scores-…`) join the
    /// root.
    pub fn resolve(
        &self,
        name: &str,
    ) -> FPath {
        let path = Path::new(name);
        if path.is_absolute() {
            return FPath::from(name);
        }

        path_to_fpath(Path::new(&self.root).join(path).as_path())
    }

    /// Enumerate score log files under the root, recursing subdirectories.
    ///
    /// Returns paths sorted for deterministic output. An unreadable root is
    /// [`SourceUnavailable`].
    ///
    /// [`SourceUnavailable`]: crate::common::SeriesError::SourceUnavailable
    pub fn discover(&self) -> SeriesResult<FPaths> {
        defn!("root {:?}", self.root);
        let mut found = FPaths::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = match entry {
                Ok(val) => val,
                Err(err) => {
                    defx!("walkdir error {}", err);
                    return Err(SeriesError::SourceUnavailable {
                        path: self.root.clone(),
                        source: err.into(),
                    });
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            defo!("found {:?}", entry.path());
            found.push(path_to_fpath(entry.path()));
        }
        found.sort();
        defx!("return {} path(s)", found.len());

        Ok(found)
    }
}
