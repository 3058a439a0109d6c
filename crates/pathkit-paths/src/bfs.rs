//! Breadth-first search over a [`Pather`] grid.

use std::collections::{HashMap, VecDeque};

use crate::record::GridPath;
use crate::traits::Pather;

/// Shortest path from `from` to `to` where every move costs one step.
///
/// Level-order BFS with a global visited set: a position is enqueued at most
/// once, and the search stops the first time `to` is dequeued. Returns
/// `None` if `to` cannot be reached. Only optimal for uniform-cost moves.
pub fn shortest_path_in_grid<P: Pather>(
    pather: &P,
    from: P::Pos,
    to: P::Pos,
) -> Option<GridPath<P::Pos>> {
    // Predecessor of every enqueued position; `from` maps to itself.
    let mut parents: HashMap<P::Pos, P::Pos> = HashMap::new();
    let mut queue: VecDeque<(P::Pos, usize)> = VecDeque::new();
    let mut nbuf = Vec::with_capacity(8);

    parents.insert(from, from);
    queue.push_back((from, 0));

    while let Some((cp, steps)) = queue.pop_front() {
        if cp == to {
            log::debug!(
                "grid bfs: reached target in {} steps, {} positions enqueued",
                steps,
                parents.len()
            );
            return Some(GridPath {
                path: rebuild(&parents, from, to),
                steps,
            });
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if parents.contains_key(&np) {
                continue;
            }
            parents.insert(np, cp);
            queue.push_back((np, steps + 1));
        }
    }

    log::debug!(
        "grid bfs: target unreachable, {} positions explored",
        parents.len()
    );
    None
}

fn rebuild<T: Copy + Eq + std::hash::Hash>(parents: &HashMap<T, T>, from: T, to: T) -> Vec<T> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = parents[&cur];
        path.push(cur);
    }
    path.reverse();
    path
}

/// Multi-source breadth-first step map.
///
/// Every source starts at 0. Expansion stops beyond `max_steps`. Returns the
/// step count of every reached position.
pub fn grid_distances<P: Pather>(
    pather: &P,
    sources: &[P::Pos],
    max_steps: usize,
) -> HashMap<P::Pos, usize> {
    let mut dist: HashMap<P::Pos, usize> = HashMap::new();
    let mut queue: VecDeque<P::Pos> = VecDeque::new();

    for &src in sources {
        if dist.contains_key(&src) {
            continue;
        }
        dist.insert(src, 0);
        queue.push_back(src);
    }

    let mut nbuf = Vec::with_capacity(8);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;
        if nd > max_steps {
            continue;
        }
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FnPather;
    use crate::walker::TileWalker;
    use pathkit_core::{Point, Tile, TileMap};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    // One column blocked all the way down except the bottom row.
    const DETOUR: &str = "
S#.
.#E
.#.
.#.
...
";

    #[test]
    fn forced_detour() {
        let map = TileMap::parse(DETOUR).unwrap();
        let (s, e) = (map.marker('S').unwrap(), map.marker('E').unwrap());
        let res = shortest_path_in_grid(&TileWalker::cardinal(&map), s, e).unwrap();
        assert_eq!(res.steps, 9);
        assert_eq!(res.path.len(), 10);
        assert_eq!(res.path[0], s);
        assert_eq!(res.path[9], e);
        assert!(res.path.contains(&Point::new(1, 4)));
        for w in res.path.windows(2) {
            assert_eq!(w[0].manhattan(w[1]), 1);
            assert!(map.is_passable(w[1]));
        }
    }

    #[test]
    fn unreachable_target() {
        let map = TileMap::parse("S#E\n.#.").unwrap();
        let (s, e) = (map.marker('S').unwrap(), map.marker('E').unwrap());
        assert_eq!(shortest_path_in_grid(&TileWalker::cardinal(&map), s, e), None);
    }

    #[test]
    fn start_is_target() {
        let map = TileMap::new(2, 2);
        let p = Point::new(1, 1);
        let res = shortest_path_in_grid(&TileWalker::cardinal(&map), p, p).unwrap();
        assert_eq!(res.path, vec![p]);
        assert_eq!(res.steps, 0);
    }

    #[test]
    fn works_on_any_position_type() {
        // A line of integers where you may step +1 or +3.
        let line = FnPather::new(|p: i32| {
            [p + 1, p + 3]
                .into_iter()
                .filter(|n| *n <= 10)
                .collect::<Vec<_>>()
        });
        let res = shortest_path_in_grid(&line, 0, 10).unwrap();
        assert_eq!(res.steps, 4);
        assert_eq!(res.path.first(), Some(&0));
        assert_eq!(res.path.last(), Some(&10));
    }

    #[test]
    fn distance_map_respects_limit() {
        let map = TileMap::parse(DETOUR).unwrap();
        let walker = TileWalker::cardinal(&map);
        let s = map.marker('S').unwrap();

        let all = grid_distances(&walker, &[s], usize::MAX);
        assert_eq!(all.len(), map.floor().count());
        assert_eq!(all[&map.marker('E').unwrap()], 9);

        let near = grid_distances(&walker, &[s], 2);
        assert_eq!(near.len(), 3);
        assert!(near.values().all(|&d| d <= 2));
    }

    #[test]
    fn distance_map_multi_source() {
        let map = TileMap::new(5, 1);
        let walker = TileWalker::cardinal(&map);
        let d = grid_distances(&walker, &[Point::new(0, 0), Point::new(4, 0)], 10);
        assert_eq!(d[&Point::new(2, 0)], 2);
        assert_eq!(d[&Point::new(3, 0)], 1);
    }

    /// Minimum moves over every simple path, by depth-first enumeration.
    fn brute_force(map: &TileMap, cur: Point, to: Point, seen: &mut Vec<Point>) -> Option<usize> {
        if cur == to {
            return Some(0);
        }
        let mut best: Option<usize> = None;
        for n in cur.neighbors_4() {
            if !map.is_passable(n) || seen.contains(&n) {
                continue;
            }
            seen.push(n);
            if let Some(d) = brute_force(map, n, to, seen) {
                best = Some(best.map_or(d + 1, |b| b.min(d + 1)));
            }
            seen.pop();
        }
        best
    }

    #[test]
    fn matches_brute_force_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut map = TileMap::new(4, 3);
            for y in 0..3 {
                for x in 0..4 {
                    if rng.random_range(0..10u32) < 3 {
                        map.set(Point::new(x, y), Tile::Wall);
                    }
                }
            }
            let from = Point::new(0, 0);
            let to = Point::new(3, 2);
            map.set(from, Tile::Floor);
            map.set(to, Tile::Floor);

            let expected = brute_force(&map, from, to, &mut vec![from]);
            let got = shortest_path_in_grid(&TileWalker::cardinal(&map), from, to);
            assert_eq!(got.map(|r| r.steps), expected, "map:\n{map}");
        }
    }
}
