use algoviz_core::{Coord, Grid, TraversalResult};

use crate::search::{Search, UNREACHABLE};

impl Search {
    /// Dijkstra traversal from `start` to `goal` with per-cell entry costs.
    ///
    /// Tentative distances start at [`UNREACHABLE`] except `start` = 0. Each
    /// round settles the unvisited cell with minimum tentative distance,
    /// found by a row-major linear scan: equal distances therefore resolve
    /// to the lowest row, then the lowest column. Neighbors relax with edge
    /// weight = the neighbor cell's cost. Terminates when the goal settles
    /// or no reachable unvisited cell remains.
    pub(crate) fn dijkstra(&mut self, grid: &Grid, start: Coord, goal: Coord) -> TraversalResult {
        let mut result = TraversalResult::default();
        let Some(si) = grid.idx(start) else {
            return result;
        };
        self.dist[si] = 0;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        loop {
            let mut min = UNREACHABLE;
            let mut u = None;
            for i in 0..grid.len() {
                if !self.visited[i] && self.dist[i] < min {
                    min = self.dist[i];
                    u = Some(i);
                }
            }
            let Some(ci) = u else {
                break;
            };

            self.visited[ci] = true;
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
                let weight = grid.at(np).map_or(1, |cell| cell.cost());
                let tentative = min + weight;
                if tentative < self.dist[ni] {
                    self.dist[ni] = tentative;
                    self.parent[ni] = ci;
                }
            }
        }

        self.nbuf = nbuf;
        result.path = self.reconstruct(grid, start, goal);
        result
    }
}
