//! Finder configuration.

/// Which best-first variant a [`PathFinder`](crate::PathFinder) runs.
///
/// All variants share one search loop. They differ only in whether the
/// cached heuristic is consulted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FinderKind {
    /// Uniform-cost search; heuristics are treated as zero.
    Dijkstra,
    /// A* using the cached heuristic layer.
    #[default]
    Astar,
    /// Behaves exactly like [`FinderKind::Astar`]. Replanning is done by
    /// re-solving after updating cache layers, not by incremental repair.
    Dstar,
}

impl FinderKind {
    /// Whether this variant reads the heuristic layer.
    #[inline]
    pub fn uses_heuristic(self) -> bool {
        !matches!(self, Self::Dijkstra)
    }
}

/// Configuration for creating a [`PathFinder`](crate::PathFinder).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderConfig {
    pub kind: FinderKind,
    /// Upper bound on node expansions per `solve` call. `None` runs to
    /// completion.
    pub max_expansions: Option<usize>,
}

impl FinderConfig {
    /// Configuration for `kind` with no expansion budget.
    pub fn new(kind: FinderKind) -> Self {
        Self {
            kind,
            max_expansions: None,
        }
    }

    /// Set the per-call expansion budget.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = FinderConfig::new(FinderKind::Dstar).with_max_expansions(64);
        let json = serde_json::to_string(&c).unwrap();
        let back: FinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn config_missing_fields_use_defaults() {
        let back: FinderConfig = serde_json::from_str(r#"{"kind":"dijkstra"}"#).unwrap();
        assert_eq!(back, FinderConfig::new(FinderKind::Dijkstra));
    }
}
