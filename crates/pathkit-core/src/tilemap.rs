//! ASCII terrain maps.
//!
//! A [`TileMap`] is parsed from text where `#` is a wall, `.` is floor, and
//! any ASCII letter is a floor tile recorded as a named marker (handy for
//! start/end positions such as `S` and `E`). The map only stores terrain;
//! movement rules belong to whoever walks it.

use std::collections::BTreeMap;
use std::fmt;

use crate::geom::Point;

/// Terrain of a single map position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

impl Tile {
    /// Whether a walker may stand on this tile.
    #[inline]
    pub fn is_passable(self) -> bool {
        self == Tile::Floor
    }
}

/// Number of cells in a `width` x `height` map, computed without `i32`
/// overflow.
fn area(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize
}

/// A rectangular grid of [`Tile`] values with named markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<Tile>,
    size: Point,
    markers: BTreeMap<char, Point>,
}

impl TileMap {
    /// Create a `width` x `height` map filled with floor.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![Tile::Floor; area(width, height)],
            size: Point::new(width, height),
            markers: BTreeMap::new(),
        }
    }

    /// Parse a map from ASCII art.
    ///
    /// Leading and trailing blank lines are ignored, every remaining line
    /// must have the same width. When a marker letter appears more than
    /// once, the last occurrence (in row-major order) wins.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let Some(first) = lines.first() else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * lines.len());
        let mut markers = BTreeMap::new();
        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(MapError::InconsistentSize { line: y });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    c if c.is_ascii_alphabetic() => {
                        markers.insert(c, pos);
                        Tile::Floor
                    }
                    _ => return Err(MapError::InvalidRune { ch, pos }),
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            size: Point::new(width as i32, lines.len() as i32),
            markers,
        })
    }

    /// Size as a `Point` (x = width, y = height).
    pub fn size(&self) -> Point {
        self.size
    }

    /// Width of the map.
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Height of the map.
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size.x && p.y < self.size.y
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.size.x as usize + p.x as usize
    }

    /// Tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Whether `p` is inside the map and passable.
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let i = self.index(p);
        self.tiles[i] = tile;
    }

    /// Position of the marker letter `ch`, if the map had one.
    pub fn marker(&self, ch: char) -> Option<Point> {
        self.markers.get(&ch).copied()
    }

    /// Iterate over all passable positions in row-major order.
    pub fn floor(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size.y)
            .flat_map(move |y| (0..self.size.x).map(move |x| Point::new(x, y)))
            .filter(|&p| self.is_passable(p))
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker_at: BTreeMap<Point, char> = self.markers.iter().map(|(&c, &p)| (p, c)).collect();
        for y in 0..self.size.y {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.size.x {
                let p = Point::new(x, y);
                let ch = match (marker_at.get(&p), self.tiles[self.index(p)]) {
                    (Some(&c), Tile::Floor) => c,
                    (_, Tile::Floor) => '.',
                    (_, Tile::Wall) => '#',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`TileMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contained no map rows.
    Empty,
    /// A row's width differs from the first row.
    InconsistentSize { line: usize },
    /// A character that is neither terrain nor a marker letter.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentSize { line } => {
                write!(f, "map: line {line} differs in width from the first line")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
S.#..
..#.E
.....
";

    #[test]
    fn parse_size_and_markers() {
        let m = TileMap::parse(ROOM).unwrap();
        assert_eq!(m.size(), Point::new(5, 3));
        assert_eq!(m.marker('S'), Some(Point::new(0, 0)));
        assert_eq!(m.marker('E'), Some(Point::new(4, 1)));
        assert_eq!(m.marker('X'), None);
        assert_eq!(m.at(Point::new(2, 1)), Some(Tile::Wall));
        assert!(m.is_passable(Point::new(0, 0)));
        assert!(!m.is_passable(Point::new(2, 0)));
        assert!(!m.is_passable(Point::new(5, 0)));
    }

    #[test]
    fn display_round_trips() {
        let m = TileMap::parse(ROOM).unwrap();
        assert_eq!(m.to_string(), ROOM.trim());
    }

    #[test]
    fn set_and_floor() {
        let mut m = TileMap::new(3, 2);
        assert_eq!(m.floor().count(), 6);
        m.set(Point::new(1, 1), Tile::Wall);
        m.set(Point::new(9, 9), Tile::Wall);
        assert_eq!(m.floor().count(), 5);
        assert!(!m.floor().any(|p| p == Point::new(1, 1)));
    }

    #[test]
    fn area_does_not_overflow_i32() {
        assert_eq!(area(50_000, 50_000), 2_500_000_000);
        assert_eq!(area(i32::MAX, 2), 2 * i32::MAX as usize);
        assert_eq!(area(-3, 4), 0);
    }

    #[test]
    fn index_past_i32_range() {
        let m = TileMap {
            tiles: Vec::new(),
            size: Point::new(50_000, 50_000),
            markers: BTreeMap::new(),
        };
        assert_eq!(m.index(Point::new(49_999, 49_999)), 2_499_999_999);
    }

    #[test]
    fn negative_size_is_empty() {
        let m = TileMap::new(-3, 4);
        assert_eq!(m.width(), 0);
        assert_eq!(m.floor().count(), 0);
    }

    #[test]
    fn inconsistent_size_error() {
        assert_eq!(
            TileMap::parse("..\n..."),
            Err(MapError::InconsistentSize { line: 1 })
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = TileMap::parse("..\n.?").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidRune {
                ch: '?',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn empty_error() {
        assert_eq!(TileMap::parse("\n\n"), Err(MapError::Empty));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let json = serde_json::to_string(&Tile::Wall).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tile::Wall);
    }
}
