//! The freshness oracle: decides whether a derived artifact needs
//! regeneration.
//!
//! This is a pure predicate over filesystem state at call time - it never
//! mutates anything and needs no locking, so it is safe to consult once per
//! asset or many times over.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Staleness predicate for (source, artifact) pairs.
///
/// Carries only the process-wide force flag; everything else is read from
/// file metadata on each call.
#[derive(Debug, Clone, Copy)]
pub struct Freshness {
    force: bool,
}

impl Freshness {
    /// Create an oracle. With `force` set, every artifact is reported stale.
    #[must_use]
    pub const fn new(force: bool) -> Self {
        Self { force }
    }

    /// Returns `true` when the artifact should be regenerated from the
    /// source.
    ///
    /// Decision order:
    /// 1. force flag set - always stale;
    /// 2. source missing (or unstattable) - *not* stale. This is deliberate
    ///    policy, not an error path: a vanished source silently suppresses
    ///    rebuilding rather than raising an error;
    /// 3. artifact missing - stale (a missing artifact counts as having the
    ///    oldest possible timestamp);
    /// 4. otherwise stale iff the source mtime is strictly after the
    ///    artifact mtime.
    #[must_use]
    pub fn needs_rebuild(&self, source: &Path, artifact: &Path) -> bool {
        if self.force {
            return true;
        }

        let Ok(source_meta) = fs::metadata(source) else {
            tracing::debug!("source {} missing, treating as up to date", source.display());
            return false;
        };
        let source_mtime = source_meta
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let artifact_mtime = fs::metadata(artifact)
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        source_mtime > artifact_mtime
    }
}
