use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use num_traits::{NumCast, Zero};

/// Manhattan distance on offset coordinates.
///
/// This is not the true hex step distance, and can overestimate it when
/// moving diagonally across rows.
pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

impl<Cost: Copy + PartialOrd + Zero + NumCast> SearchContext<Cost> {
    pub fn astar_manhattan_distance_heuristic<T, F>(
        &mut self,
        grid: &HexGrid<T>,
        start: Coord,
        goal: Coord,
        cost_fn: F,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        F: Fn(&T, &T) -> Cost,
    {
        // Falls back to no estimate if the distance doesn't fit in `Cost`.
        let heuristic_fn = |a: Coord, b: Coord| -> Cost {
            NumCast::from(manhattan_distance(a, b)).unwrap_or_else(Zero::zero)
        };

        self.search_general(grid, start, goal, cost_fn, heuristic_fn, path)
    }
}

impl<T> HexGrid<T> {
    /// Finds a path from `start` to `goal`, returning its total cost and the
    /// coordinates along it, both endpoints included.
    ///
    /// `cost_fn` is called with the cell being left and the cell being
    /// entered. A negative cost means the move is impossible, and so does a
    /// NaN cost.
    pub fn find_path<Cost, F>(&self, start: Coord, goal: Coord, cost_fn: F) -> Result<(Cost, Vec<Coord>), Error>
    where
        Cost: Copy + PartialOrd + Zero + NumCast,
        F: Fn(&T, &T) -> Cost,
    {
        let mut ctx = SearchContext::new(self.size());
        let mut path = Vec::new();
        let metadata = ctx.astar_manhattan_distance_heuristic(self, start, goal, cost_fn, &mut path)?;
        Ok((metadata.cost, path))
    }
}
