//! Random grid generation for demos and property tests.

use rand::{Rng, RngExt};

use crate::cell::{Cell, CellKind};
use crate::coord::Coord;
use crate::error::Result;
use crate::grid::Grid;

/// Generate a random grid with obstacle density `density` (clamped to
/// `[0, 1]`) and random, distinct, non-obstacle start and goal cells.
///
/// The grid must hold at least two cells so start and goal can differ.
/// Returns the grid together with the chosen start and goal coordinates.
pub fn random_grid(
    rows: i32,
    cols: i32,
    density: f64,
    rng: &mut impl Rng,
) -> Result<(Grid, Coord, Coord)> {
    let mut grid = Grid::new(rows, cols)?;
    debug_assert!(grid.len() >= 2);
    let density = density.clamp(0.0, 1.0);

    for r in 0..rows {
        for c in 0..cols {
            if rng.random::<f64>() < density {
                grid.set(Coord::new(r, c), Cell::obstacle());
            }
        }
    }

    // Collect open cells; carve two corners if the fill left fewer than two.
    let mut open: Vec<Coord> = grid
        .iter()
        .filter(|(_, cell)| cell.kind != CellKind::Obstacle)
        .map(|(c, _)| c)
        .collect();
    if open.len() < 2 {
        let a = Coord::new(0, 0);
        let b = Coord::new(rows - 1, cols - 1);
        grid.set(a, Cell::empty());
        grid.set(b, Cell::empty());
        open = vec![a, b];
    }

    let start = open.swap_remove(rng.random_range(0..open.len()));
    let goal = open[rng.random_range(0..open.len())];
    grid.set(start, Cell::start());
    grid.set(goal, Cell::goal());
    Ok((grid, start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_density_has_no_obstacles() {
        let mut rng = rand::rng();
        let (grid, start, goal) = random_grid(6, 8, 0.0, &mut rng).unwrap();
        assert_eq!(grid.count(CellKind::Obstacle), 0);
        assert_ne!(start, goal);
        assert_eq!(grid.at(start).unwrap().kind, CellKind::Start);
        assert_eq!(grid.at(goal).unwrap().kind, CellKind::Goal);
    }

    #[test]
    fn start_and_goal_survive_full_density() {
        let mut rng = rand::rng();
        let (grid, start, goal) = random_grid(5, 5, 1.0, &mut rng).unwrap();
        assert_ne!(start, goal);
        assert_eq!(grid.at(start).unwrap().kind, CellKind::Start);
        assert_eq!(grid.at(goal).unwrap().kind, CellKind::Goal);
        assert_eq!(grid.count(CellKind::Start), 1);
        assert_eq!(grid.count(CellKind::Goal), 1);
    }

    #[test]
    fn generated_grid_passes_validation() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let (grid, start, goal) = random_grid(10, 10, 0.3, &mut rng).unwrap();
            assert!(grid.validate(start, goal).is_ok());
        }
    }
}
