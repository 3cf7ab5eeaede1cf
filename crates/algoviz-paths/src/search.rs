use algoviz_core::{Coord, Grid, Result, TraversalResult};

/// Sentinel value meaning "no tentative distance yet" in Dijkstra runs.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index for cells no traversal has reached.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Which traversal algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalKind {
    Bfs,
    Dfs,
    Dijkstra,
}

/// Run one traversal over a grid snapshot.
///
/// Convenience wrapper that allocates a fresh [`Search`]; callers running
/// many traversals should hold a `Search` and call [`Search::run`] to reuse
/// its scratch state.
pub fn run_traversal(
    kind: TraversalKind,
    grid: &Grid,
    start: Coord,
    goal: Coord,
) -> Result<TraversalResult> {
    Search::new().run(kind, grid, start, goal)
}

/// Reusable scratch state for traversal runs.
///
/// Owns the visited flags, parent pointers, and tentative-distance map so
/// that repeated runs over same-sized grids incur no allocations. The grid
/// itself is never mutated; all bookkeeping lives here.
pub struct Search {
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
    pub(crate) dist: Vec<i32>,
    // Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Coord>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// Create an empty `Search`; scratch vectors grow on first use.
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
            parent: Vec::new(),
            dist: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Run the selected algorithm from `start` to `goal`.
    ///
    /// Validates the entry contract first (coordinates in bounds, correct
    /// cell kinds) and performs no work on failure. An unreachable goal is
    /// not an error: the returned result carries an empty path.
    pub fn run(
        &mut self,
        kind: TraversalKind,
        grid: &Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<TraversalResult> {
        grid.validate(start, goal)?;
        self.reset(grid.len());
        let result = match kind {
            TraversalKind::Bfs => self.bfs(grid, start, goal),
            TraversalKind::Dfs => self.dfs(grid, start, goal),
            TraversalKind::Dijkstra => self.dijkstra(grid, start, goal),
        };
        log::debug!(
            "{kind:?} {start} -> {goal}: settled {}, path length {}",
            result.visit_order.len(),
            result.path.len()
        );
        Ok(result)
    }

    fn reset(&mut self, len: usize) {
        self.visited.clear();
        self.visited.resize(len, false);
        self.parent.clear();
        self.parent.resize(len, NO_PARENT);
        self.dist.clear();
        self.dist.resize(len, UNREACHABLE);
    }

    /// Walk parent pointers backward from `goal` to `start`.
    ///
    /// Returns the inclusive start-to-goal route, or an empty path when the
    /// goal was never reached. A traversal whose start *is* the goal settles
    /// it immediately, so the path is the single shared cell.
    pub(crate) fn reconstruct(&self, grid: &Grid, start: Coord, goal: Coord) -> Vec<Coord> {
        if start == goal {
            return vec![start];
        }
        let Some(gi) = grid.idx(goal) else {
            return Vec::new();
        };
        if self.parent[gi] == NO_PARENT {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut ci = gi;
        while ci != NO_PARENT {
            path.push(grid.coord(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::{Cell, Error, mapgen::random_grid};

    fn open_grid(rows: i32, cols: i32, start: Coord, goal: Coord) -> Grid {
        let mut g = Grid::new(rows, cols).unwrap();
        g.set(start, Cell::start());
        g.set(goal, Cell::goal());
        g
    }

    const ALL_KINDS: [TraversalKind; 3] = [
        TraversalKind::Bfs,
        TraversalKind::Dfs,
        TraversalKind::Dijkstra,
    ];

    #[test]
    fn run_rejects_invalid_input_before_any_work() {
        let g = open_grid(3, 3, Coord::new(0, 0), Coord::new(2, 2));
        for kind in ALL_KINDS {
            let err = run_traversal(kind, &g, Coord::new(9, 9), Coord::new(2, 2));
            assert_eq!(err, Err(Error::OutOfBounds(Coord::new(9, 9))));
            let err = run_traversal(kind, &g, Coord::new(1, 1), Coord::new(2, 2));
            assert_eq!(err, Err(Error::MissingStart(Coord::new(1, 1))));
        }
    }

    #[test]
    fn open_grid_path_length_is_manhattan_plus_one() {
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let g = open_grid(3, 3, start, goal);
        for kind in [TraversalKind::Bfs, TraversalKind::Dijkstra] {
            let r = run_traversal(kind, &g, start, goal).unwrap();
            assert_eq!(
                r.path.len() as i32,
                start.manhattan(goal) + 1,
                "{kind:?} path should be a shortest Manhattan route"
            );
            assert_eq!(r.path.first(), Some(&start));
            assert_eq!(r.path.last(), Some(&goal));
        }
    }

    #[test]
    fn isolated_goal_yields_empty_path_for_all_kinds() {
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let mut g = open_grid(3, 3, start, goal);
        g.set(Coord::new(1, 2), Cell::obstacle());
        g.set(Coord::new(2, 1), Cell::obstacle());
        for kind in ALL_KINDS {
            let r = run_traversal(kind, &g, start, goal).unwrap();
            assert!(r.path.is_empty(), "{kind:?} should find no path");
            assert!(!r.is_reachable());
            assert!(
                !r.visit_order.contains(&goal),
                "{kind:?} must not settle an unreachable goal"
            );
        }
    }

    #[test]
    fn start_equals_goal_settles_immediately() {
        // Not producible through validate (one cell cannot be both kinds),
        // so exercise reconstruct directly.
        let g = open_grid(2, 2, Coord::new(0, 0), Coord::new(1, 1));
        let s = Search::new();
        assert_eq!(
            s.reconstruct(&g, Coord::new(0, 0), Coord::new(0, 0)),
            vec![Coord::new(0, 0)]
        );
    }

    #[test]
    fn scratch_state_reuse_is_equivalent_to_fresh_runs() {
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let g = open_grid(3, 3, start, goal);
        let mut search = Search::new();
        for kind in ALL_KINDS {
            let reused = search.run(kind, &g, start, goal).unwrap();
            let fresh = run_traversal(kind, &g, start, goal).unwrap();
            assert_eq!(reused, fresh);
        }
    }

    #[test]
    fn bfs_never_longer_than_dfs_and_matches_unit_dijkstra() {
        let mut rng = rand::rng();
        for _ in 0..25 {
            let (g, start, goal) = random_grid(8, 12, 0.25, &mut rng).unwrap();
            let bfs = run_traversal(TraversalKind::Bfs, &g, start, goal).unwrap();
            let dfs = run_traversal(TraversalKind::Dfs, &g, start, goal).unwrap();
            let dij = run_traversal(TraversalKind::Dijkstra, &g, start, goal).unwrap();
            // Reachability is a property of the grid, not the algorithm.
            assert_eq!(bfs.is_reachable(), dfs.is_reachable());
            assert_eq!(bfs.is_reachable(), dij.is_reachable());
            if bfs.is_reachable() {
                assert!(bfs.path.len() <= dfs.path.len());
                // All weights are 1, so Dijkstra's path cost equals BFS's.
                assert_eq!(bfs.path.len(), dij.path.len());
            }
        }
    }

    #[test]
    fn traversals_are_deterministic() {
        let mut rng = rand::rng();
        let (g, start, goal) = random_grid(6, 6, 0.2, &mut rng).unwrap();
        for kind in ALL_KINDS {
            let a = run_traversal(kind, &g, start, goal).unwrap();
            let b = run_traversal(kind, &g, start, goal).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn traversal_kind_round_trip() {
        for kind in [
            TraversalKind::Bfs,
            TraversalKind::Dfs,
            TraversalKind::Dijkstra,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: TraversalKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
