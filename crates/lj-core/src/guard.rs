//! Opt-in limits for walking join trees.
//!
//! The plain builder and converters recurse without bounds, which is what
//! existing callers rely on. A cyclic flat list (`A -> B`, `B -> A`) makes the
//! plain builder recurse until the stack overflows. The guarded variants take
//! [`TraversalLimits`] and fail with a [`TraversalError`] instead.

use thiserror::Error;

/// Default depth cap used by [`TraversalLimits::hardened`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Errors raised by guarded traversals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// A logrepo was reached again while already on the current path.
    #[error("join cycle detected at logrepo {logrepo}")]
    Cycle { logrepo: String },

    /// The tree is deeper than the configured limit.
    #[error("join tree exceeds maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

/// Limits applied by the guarded traversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Maximum number of levels below the root. `None` is unbounded.
    pub max_depth: Option<usize>,
    /// Reject a logrepo that reappears on its own ancestor path.
    pub detect_cycles: bool,
}

impl TraversalLimits {
    /// Depth cap of [`DEFAULT_MAX_DEPTH`] plus cycle detection.
    #[must_use]
    pub const fn hardened() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            detect_cycles: true,
        }
    }

    /// Whether any limit is active.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_depth.is_none() && !self.detect_cycles
    }
}

/// Tracks the logrepo names on the current root-to-node path.
#[derive(Debug)]
pub(crate) struct PathGuard<'a> {
    limits: TraversalLimits,
    path: Vec<Option<&'a str>>,
}

impl<'a> PathGuard<'a> {
    pub(crate) fn new(limits: TraversalLimits, root: Option<&'a str>) -> Self {
        Self {
            limits,
            path: vec![root],
        }
    }

    /// Enters one level, whose node joins into `logrepo`.
    ///
    /// `depth` is the level being entered, with the top level at 1.
    pub(crate) fn enter(
        &mut self,
        depth: usize,
        logrepo: Option<&'a str>,
    ) -> Result<(), TraversalError> {
        if let Some(limit) = self.limits.max_depth {
            if depth > limit {
                tracing::warn!(limit, "join tree depth limit exceeded");
                return Err(TraversalError::DepthExceeded { limit });
            }
        }
        if let Some(name) = logrepo {
            if self.limits.detect_cycles && self.path.contains(&Some(name)) {
                tracing::warn!(logrepo = name, "join cycle detected");
                return Err(TraversalError::Cycle {
                    logrepo: name.to_string(),
                });
            }
        }
        self.path.push(logrepo);
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_unbounded() {
        assert!(TraversalLimits::default().is_unbounded());
        assert!(!TraversalLimits::hardened().is_unbounded());
    }

    #[test]
    fn guard_rejects_repeated_name_on_path() {
        let mut guard = PathGuard::new(TraversalLimits::hardened(), Some("A"));
        guard.enter(1, Some("B")).unwrap();
        let err = guard.enter(2, Some("A")).unwrap_err();
        assert_eq!(
            err,
            TraversalError::Cycle {
                logrepo: "A".to_string()
            }
        );
    }

    #[test]
    fn guard_allows_name_after_leaving_branch() {
        let mut guard = PathGuard::new(TraversalLimits::hardened(), Some("A"));
        guard.enter(1, Some("B")).unwrap();
        guard.leave();
        guard.enter(1, Some("B")).unwrap();
    }

    #[test]
    fn guard_enforces_depth() {
        let limits = TraversalLimits {
            max_depth: Some(1),
            detect_cycles: false,
        };
        let mut guard = PathGuard::new(limits, None);
        guard.enter(1, Some("B")).unwrap();
        assert_eq!(
            guard.enter(2, Some("C")),
            Err(TraversalError::DepthExceeded { limit: 1 })
        );
    }
}
