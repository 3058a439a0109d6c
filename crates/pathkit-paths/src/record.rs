use crate::graph::{Index, Weight};

/// A path through a graph and its accumulated weight.
///
/// `path` lists every visited index from start to end, both included.
/// For unweighted graphs `weight` is the number of traversed edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphPath {
    pub path: Vec<Index>,
    pub weight: Weight,
}

impl GraphPath {
    /// Number of traversed edges.
    pub fn edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First index of the path.
    pub fn start(&self) -> Option<Index> {
        self.path.first().copied()
    }

    /// Last index of the path.
    pub fn end(&self) -> Option<Index> {
        self.path.last().copied()
    }
}

/// A path through a grid, endpoints included, and its number of moves.
///
/// `steps == path.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath<P> {
    pub path: Vec<P>,
    pub steps: usize,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathkit_core::Point;

    #[test]
    fn graph_path_round_trip() {
        let p = GraphPath {
            path: vec![0, 2, 3],
            weight: 40,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: GraphPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn grid_path_round_trip() {
        let p = GridPath {
            path: vec![Point::new(0, 0), Point::new(1, 0)],
            steps: 1,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: GridPath<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
