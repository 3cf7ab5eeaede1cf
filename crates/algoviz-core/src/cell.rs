//! The [`Cell`] type — one grid position with a kind and traversal cost.

/// What occupies a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    Goal,
    Obstacle,
    Weighted,
}

/// A single grid cell.
///
/// `weight` is meaningful only for [`CellKind::Weighted`] cells and must be
/// ≥ 1; every other kind costs 1 to enter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    pub weight: i32,
}

impl Cell {
    /// An empty, unit-cost cell.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            kind: CellKind::Empty,
            weight: 1,
        }
    }

    /// The traversal start cell.
    #[inline]
    pub const fn start() -> Self {
        Self {
            kind: CellKind::Start,
            weight: 1,
        }
    }

    /// The traversal goal cell.
    #[inline]
    pub const fn goal() -> Self {
        Self {
            kind: CellKind::Goal,
            weight: 1,
        }
    }

    /// An impassable cell.
    #[inline]
    pub const fn obstacle() -> Self {
        Self {
            kind: CellKind::Obstacle,
            weight: 1,
        }
    }

    /// A passable cell costing `weight` (≥ 1) to enter.
    #[inline]
    pub const fn weighted(weight: i32) -> Self {
        Self {
            kind: CellKind::Weighted,
            weight,
        }
    }

    /// Cost of entering this cell: `weight` for Weighted cells, 1 otherwise.
    #[inline]
    pub const fn cost(self) -> i32 {
        match self.kind {
            CellKind::Weighted => self.weight,
            _ => 1,
        }
    }

    /// Whether traversal may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self.kind, CellKind::Obstacle)
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
