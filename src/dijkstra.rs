use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use num_traits::Zero;

impl<Cost: Copy + PartialOrd + Zero> SearchContext<Cost> {
    pub fn dijkstra<T, F>(
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
        self.search_general(grid, start, goal, cost_fn, |_, _| Zero::zero(), path)
    }
}

impl<T> HexGrid<T> {
    /// Like `find_path`, but without a distance estimate, so the returned
    /// path is always a cheapest one.
    pub fn find_path_dijkstra<Cost, F>(
        &self,
        start: Coord,
        goal: Coord,
        cost_fn: F,
    ) -> Result<(Cost, Vec<Coord>), Error>
    where
        Cost: Copy + PartialOrd + Zero,
        F: Fn(&T, &T) -> Cost,
    {
        let mut ctx = SearchContext::new(self.size());
        let mut path = Vec::new();
        let metadata = ctx.dijkstra(self, start, goal, cost_fn, &mut path)?;
        Ok((metadata.cost, path))
    }
}
