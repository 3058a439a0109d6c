use crate::error::PathError;

/// Default node ceiling for the visit-all search.
///
/// The breadth-first frontier reaches its widest at the last level, where it
/// holds up to `(n - 1)!` partial tours, each with its own visited set and
/// path. At 10 nodes that is ~360k entries; every extra node multiplies it.
pub const DEFAULT_MAX_VISIT_ALL_NODES: usize = 10;

/// Resource limits for [`ExhaustiveSearch`](crate::ExhaustiveSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Maximum number of frontier entries expanded. `None` = unlimited.
    pub max_expansions: Option<u64>,
    /// Maximum number of frontier entries held at once. `None` = unlimited.
    pub max_frontier: Option<usize>,
    /// Visit-all refuses graphs with more elements than this.
    pub max_visit_all_nodes: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_frontier: None,
            max_visit_all_nodes: DEFAULT_MAX_VISIT_ALL_NODES,
        }
    }
}

/// Running tally of one search against its [`SearchLimits`].
pub(crate) struct Budget {
    limits: SearchLimits,
    expansions: u64,
}

impl Budget {
    pub(crate) fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            expansions: 0,
        }
    }

    pub(crate) fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Count one expansion.
    pub(crate) fn expand(&mut self, frontier: usize) -> Result<(), PathError> {
        self.expansions += 1;
        if self.limits.max_expansions.is_some_and(|max| self.expansions > max) {
            return Err(self.exceeded(frontier));
        }
        Ok(())
    }

    /// Check the frontier size after a push.
    pub(crate) fn admit(&self, frontier: usize) -> Result<(), PathError> {
        if self.limits.max_frontier.is_some_and(|max| frontier > max) {
            return Err(self.exceeded(frontier));
        }
        Ok(())
    }

    fn exceeded(&self, frontier: usize) -> PathError {
        log::warn!(
            "exhaustive search aborted: {} expansions, frontier {}",
            self.expansions,
            frontier
        );
        PathError::BudgetExceeded {
            expansions: self.expansions,
            frontier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_by_default() {
        let mut b = Budget::new(SearchLimits::default());
        for _ in 0..10_000 {
            b.expand(1_000_000).unwrap();
        }
        assert!(b.admit(usize::MAX).is_ok());
        assert_eq!(b.expansions(), 10_000);
    }

    #[test]
    fn expansion_limit() {
        let mut b = Budget::new(SearchLimits {
            max_expansions: Some(2),
            ..SearchLimits::default()
        });
        assert!(b.expand(0).is_ok());
        assert!(b.expand(0).is_ok());
        assert_eq!(
            b.expand(5),
            Err(PathError::BudgetExceeded {
                expansions: 3,
                frontier: 5
            })
        );
    }

    #[test]
    fn frontier_limit() {
        let b = Budget::new(SearchLimits {
            max_frontier: Some(4),
            ..SearchLimits::default()
        });
        assert!(b.admit(4).is_ok());
        assert!(b.admit(5).is_err());
    }
}
