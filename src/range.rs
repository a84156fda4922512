use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use best::BestMap;
use grid_2d::{Coord, Grid, Size};
use num_traits::Zero;
use std::cmp::{Ordering, Reverse};
use std::collections::VecDeque;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeResult<Cost> {
    pub coord: Coord,
    pub cost: Cost,
}

/// Orders results by cost, then by x, then by y.
pub fn sort_range_results<Cost: PartialOrd>(results: &mut [RangeResult<Cost>]) {
    results.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(Ordering::Equal)
            .then(a.coord.x.cmp(&b.coord.x))
            .then(a.coord.y.cmp(&b.coord.y))
    });
}

#[derive(Debug, Clone, Copy)]
struct RangeNode<Cost> {
    seen: u64,
    coord: Coord,
    cost: Cost,
}

impl<Cost: Zero> RangeNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            coord,
            cost: Zero::zero(),
        }
    }
}

/// Reusable bookkeeping for range searches over grids of a given size.
#[derive(Debug, Clone)]
pub struct RangeContext<Cost> {
    seq: u64,
    queue: VecDeque<usize>,
    node_grid: Grid<RangeNode<Cost>>,
}

impl<Cost: Copy + PartialOrd + Zero> RangeContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            queue: VecDeque::new(),
            node_grid: Grid::new_fn(size, RangeNode::new),
        }
    }

    pub fn width(&self) -> u32 {
        self.node_grid.width()
    }

    pub fn height(&self) -> u32 {
        self.node_grid.height()
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    /// Expands outwards from `start` in discovery order, calling `visit` on
    /// each cell whose cost is within budget.
    ///
    /// A cell's cost is fixed when it is first discovered. Cells discovered
    /// over budget are still marked as seen, but are neither reported nor
    /// expanded.
    fn expand<T, F, V>(
        &mut self,
        grid: &HexGrid<T>,
        start: Coord,
        config: RangeConfig<Cost>,
        cost_fn: F,
        mut visit: V,
    ) -> Result<RangeMetadata, Error>
    where
        F: Fn(&T, &T) -> Cost,
        V: FnMut(Coord, Cost, &T),
    {
        if !grid.contains(start) {
            return Err(Error::StartOutsideGrid);
        }

        let start_index = self
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::VisitOutsideContext)?;

        self.seq += 1;
        self.queue.clear();

        {
            let node = &mut self.node_grid.raw_mut()[start_index];
            node.seen = self.seq;
            node.cost = Zero::zero();
        }
        self.queue.push_back(start_index);

        let mut num_nodes_visited = 0;

        while let Some(current_index) = self.queue.pop_front() {
            let (current_coord, current_cost) = {
                let node = &self.node_grid.raw()[current_index];
                (node.coord, node.cost)
            };

            if current_cost > config.max_cost {
                continue;
            }

            let current_cell = match grid.get(current_coord) {
                Some(cell) => cell,
                None => continue,
            };

            num_nodes_visited += 1;

            if current_index != start_index || config.include_start {
                visit(current_coord, current_cost, current_cell);
            }

            for neighbour_coord in grid.neighbours(current_coord) {
                let neighbour_index = self
                    .node_grid
                    .index_of_coord(neighbour_coord)
                    .ok_or(Error::VisitOutsideContext)?;

                if self.node_grid.raw()[neighbour_index].seen == self.seq {
                    continue;
                }

                let neighbour_cell = match grid.get(neighbour_coord) {
                    Some(cell) => cell,
                    None => continue,
                };

                let edge_cost = cost_fn(current_cell, neighbour_cell);
                if !is_passable(&edge_cost) {
                    continue;
                }

                let node = &mut self.node_grid.raw_mut()[neighbour_index];
                node.seen = self.seq;
                node.cost = current_cost + edge_cost;
                self.queue.push_back(neighbour_index);
            }
        }

        trace!(
            "range search from {:?} visited {} nodes",
            start,
            num_nodes_visited
        );

        Ok(RangeMetadata { num_nodes_visited })
    }

    pub fn find_in_range<T, F>(
        &mut self,
        grid: &HexGrid<T>,
        start: Coord,
        config: RangeConfig<Cost>,
        cost_fn: F,
        results: &mut Vec<RangeResult<Cost>>,
    ) -> Result<RangeMetadata, Error>
    where
        F: Fn(&T, &T) -> Cost,
    {
        results.clear();
        let metadata = self.expand(grid, start, config, cost_fn, |coord, cost, _| {
            results.push(RangeResult { coord, cost })
        });
        if metadata.is_err() {
            results.clear();
        }
        metadata
    }

    /// The cheapest cell in range for which `predicate` holds. Among equally
    /// cheap cells, the one reached first wins.
    pub fn best_in_range<T, F, P>(
        &mut self,
        grid: &HexGrid<T>,
        start: Coord,
        config: RangeConfig<Cost>,
        cost_fn: F,
        predicate: P,
    ) -> Result<Option<RangeResult<Cost>>, Error>
    where
        F: Fn(&T, &T) -> Cost,
        P: Fn(Coord, &T) -> bool,
    {
        let mut best_map = BestMap::new();
        self.expand(grid, start, config, cost_fn, |coord, cost, cell| {
            if predicate(coord, cell) {
                best_map.insert_gt(Reverse(cost), RangeResult { coord, cost });
            }
        })?;
        Ok(best_map.into_value())
    }
}

impl<T> HexGrid<T> {
    /// Every cell reachable from `start` for at most `max_cost`, with the
    /// cost it was reached at. Unordered, and empty if `start` is outside
    /// the grid.
    ///
    /// A negative or NaN cost from `cost_fn` means the move is impossible.
    pub fn find_in_range<Cost, F>(
        &self,
        start: Coord,
        max_cost: Cost,
        include_start: bool,
        cost_fn: F,
    ) -> Vec<RangeResult<Cost>>
    where
        Cost: Copy + PartialOrd + Zero,
        F: Fn(&T, &T) -> Cost,
    {
        let config = RangeConfig {
            max_cost,
            include_start,
        };
        let mut ctx = RangeContext::new(self.size());
        let mut results = Vec::new();
        if let Err(error) = ctx.find_in_range(self, start, config, cost_fn, &mut results) {
            debug!("range search from {:?} rejected: {}", start, error);
        }
        results
    }

    pub fn find_best_in_range<Cost, F, P>(
        &self,
        start: Coord,
        config: RangeConfig<Cost>,
        cost_fn: F,
        predicate: P,
    ) -> Option<RangeResult<Cost>>
    where
        Cost: Copy + PartialOrd + Zero,
        F: Fn(&T, &T) -> Cost,
        P: Fn(Coord, &T) -> bool,
    {
        let mut ctx = RangeContext::new(self.size());
        match ctx.best_in_range(self, start, config, cost_fn, predicate) {
            Ok(best) => best,
            Err(error) => {
                debug!("range search from {:?} rejected: {}", start, error);
                None
            }
        }
    }
}
