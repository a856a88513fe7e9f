//! Binary discovery for external tools.
//!
//! Discovery is a ranked list of strategies tried in order, first success
//! wins: a list of fixed candidate install paths, an
//! environment-variable override, and finally a PATH lookup via the `which`
//! crate. "Not found" is not fatal here - the unresolved binding surfaces
//! later, per invocation, as [`crate::tools::ToolOutcome::NotFound`].

use std::path::{Path, PathBuf};

use crate::constants::{INKSCAPE_CANDIDATES, INKSCAPE_ENV_VAR};

/// One way of finding a tool binary.
#[derive(Debug, Clone)]
pub enum DiscoveryStrategy {
    /// A fixed filesystem path, accepted if it exists.
    FixedPath(PathBuf),
    /// An environment variable whose value, if set and existing, wins.
    EnvOverride(String),
    /// A PATH lookup by executable name.
    PathLookup(String),
}

impl DiscoveryStrategy {
    /// Resolve this strategy against an existence probe.
    ///
    /// The probe is injectable so tests can substitute a fake "tool present
    /// at X" predicate; PATH lookups go through `which` and are not probed.
    fn resolve(&self, probe: &dyn Fn(&Path) -> bool) -> Option<PathBuf> {
        match self {
            Self::FixedPath(path) => probe(path).then(|| path.clone()),
            Self::EnvOverride(var) => std::env::var_os(var)
                .map(PathBuf::from)
                .filter(|path| probe(path)),
            Self::PathLookup(name) => which::which(name).ok(),
        }
    }
}

/// Ordered tool discovery.
///
/// Resolved once at startup by the pipeline; the resulting binding is
/// immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct ToolLocator {
    strategies: Vec<DiscoveryStrategy>,
}

impl ToolLocator {
    /// Build a locator from an explicit strategy list.
    #[must_use]
    pub fn new(strategies: Vec<DiscoveryStrategy>) -> Self {
        Self { strategies }
    }

    /// The standard Inkscape locator: fixed install candidates, then the
    /// `INKSCAPE` environment override, then a PATH lookup.
    #[must_use]
    pub fn inkscape() -> Self {
        let mut strategies: Vec<DiscoveryStrategy> = INKSCAPE_CANDIDATES
            .iter()
            .map(|candidate| DiscoveryStrategy::FixedPath(PathBuf::from(candidate)))
            .collect();
        strategies.push(DiscoveryStrategy::EnvOverride(INKSCAPE_ENV_VAR.to_string()));
        strategies.push(DiscoveryStrategy::PathLookup("inkscape".to_string()));
        Self::new(strategies)
    }

    /// Locate the tool on the real filesystem.
    #[must_use]
    pub fn locate(&self) -> Option<PathBuf> {
        self.locate_with(&|path: &Path| path.exists())
    }

    /// Locate the tool with an injected existence probe.
    ///
    /// Strategies are tried strictly in order; once one matches, later
    /// candidates are never probed.
    #[must_use]
    pub fn locate_with(&self, probe: &dyn Fn(&Path) -> bool) -> Option<PathBuf> {
        self.strategies.iter().find_map(|strategy| strategy.resolve(probe))
    }
}
