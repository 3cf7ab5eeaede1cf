use std::collections::VecDeque;

use algoviz_core::{Coord, Grid, TraversalResult};

use crate::search::Search;

impl Search {
    /// Breadth-first traversal from `start` to `goal`.
    ///
    /// Explores a FIFO frontier with unit step cost, so the first time the
    /// goal is dequeued the discovered path has minimum edge count (weighted
    /// cells are passable but their weight is ignored). Cells are marked
    /// visited at enqueue time and settled at dequeue time; the settlement
    /// order is what `visit_order` records.
    pub(crate) fn bfs(&mut self, grid: &Grid, start: Coord, goal: Coord) -> TraversalResult {
        let mut result = TraversalResult::default();
        let Some(si) = grid.idx(start) else {
            return result;
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.visited[si] = true;
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
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
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        result.path = self.reconstruct(grid, start, goal);
        result
    }
}
