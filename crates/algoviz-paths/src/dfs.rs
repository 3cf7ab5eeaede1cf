use algoviz_core::{Coord, Grid, TraversalResult};

use crate::search::Search;

impl Search {
    /// Depth-first traversal from `start` to `goal`.
    ///
    /// Explores a LIFO frontier, so the path found is *some* path, fully
    /// determined by the fixed neighbor enumeration order and stack
    /// discipline — no shortest-path guarantee. Cells are marked visited at
    /// push time and settled at pop time.
    pub(crate) fn dfs(&mut self, grid: &Grid, start: Coord, goal: Coord) -> TraversalResult {
        let mut result = TraversalResult::default();
        let Some(si) = grid.idx(start) else {
            return result;
        };

        let mut stack: Vec<usize> = Vec::new();
        self.visited[si] = true;
        stack.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = stack.pop() {
            let cp = grid.coord(ci);
            result.visit_order.push(cp);
            if cp == goal {
                break;
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.parent[ni] = ci;
                stack.push(ni);
            }
        }

        self.nbuf = nbuf;
        result.path = self.reconstruct(grid, start, goal);
        result
    }
}
