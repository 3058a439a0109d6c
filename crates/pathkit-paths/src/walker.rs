use pathkit_core::{Point, TileMap};

use crate::traits::Pather;

/// Allowed single-step moves on a [`TileMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Moves {
    /// Up, right, down, left.
    #[default]
    Cardinal,
    /// Cardinal moves plus the four diagonals.
    Diagonal,
}

/// A [`Pather`] that walks the passable tiles of a [`TileMap`].
///
/// Neighbours are listed clockwise starting from "up".
#[derive(Debug, Clone, Copy)]
pub struct TileWalker<'a> {
    map: &'a TileMap,
    moves: Moves,
}

impl<'a> TileWalker<'a> {
    /// Walk `map` with the given move set.
    pub fn new(map: &'a TileMap, moves: Moves) -> Self {
        Self { map, moves }
    }

    /// Walk `map` with cardinal moves only.
    pub fn cardinal(map: &'a TileMap) -> Self {
        Self::new(map, Moves::Cardinal)
    }

    /// The map being walked.
    pub fn map(&self) -> &'a TileMap {
        self.map
    }
}

impl Pather for TileWalker<'_> {
    type Pos = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let keep = |n: &Point| self.map.is_passable(*n);
        match self.moves {
            Moves::Cardinal => buf.extend(p.neighbors_4().into_iter().filter(keep)),
            Moves::Diagonal => buf.extend(p.neighbors_8().into_iter().filter(keep)),
        }
    }
}
