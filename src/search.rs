use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::path::{self, PathNode};
use grid_2d::{Coord, Grid, Size};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) visited: u64,
    pub(crate) coord: Coord,
    pub(crate) from_parent: Option<usize>,
}

impl SearchNode {
    fn new(coord: Coord) -> Self {
        Self {
            visited: 0,
            coord,
            from_parent: None,
        }
    }
}

impl PathNode for SearchNode {
    fn from_parent(&self) -> Option<usize> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// A candidate in the open set. A cell may have several of these at once;
/// only the first one popped is used.
#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry<Cost> {
    pub(crate) node_index: usize,
    pub(crate) from_parent: Option<usize>,
    pub(crate) cost: Cost,
    pub(crate) priority: Cost,
    pub(crate) insertion: u64,
}

impl<Cost: PartialOrd> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: PartialOrd> Eq for PriorityEntry<Cost> {}

impl<Cost: PartialOrd> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Lowest priority first, then earliest inserted first.
impl<Cost: PartialOrd> Ord for PriorityEntry<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.insertion.cmp(&self.insertion))
    }
}

/// Reusable bookkeeping for path searches over grids of a given size.
///
/// Each search bumps a generation counter rather than clearing the node
/// arena, so repeated searches don't reallocate.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost> {
    pub(crate) seq: u64,
    pub(crate) insertions: u64,
    pub(crate) priority_queue: BinaryHeap<PriorityEntry<Cost>>,
    pub(crate) node_grid: Grid<SearchNode>,
}

impl<Cost: Copy + PartialOrd + Zero> SearchContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            insertions: 0,
            priority_queue: BinaryHeap::new(),
            node_grid: Grid::new_fn(size, SearchNode::new),
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

    fn push(&mut self, node_index: usize, from_parent: Option<usize>, cost: Cost, priority: Cost) {
        self.insertions += 1;
        self.priority_queue.push(PriorityEntry {
            node_index,
            from_parent,
            cost,
            priority,
            insertion: self.insertions,
        });
    }

    pub(crate) fn search_general<T, F, H>(
        &mut self,
        grid: &HexGrid<T>,
        start: Coord,
        goal: Coord,
        cost_fn: F,
        heuristic_fn: H,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        F: Fn(&T, &T) -> Cost,
        H: Fn(Coord, Coord) -> Cost,
    {
        path.clear();

        if !grid.contains(start) {
            return Err(Error::StartOutsideGrid);
        }
        if !grid.contains(goal) {
            return Err(Error::GoalOutsideGrid);
        }

        let start_index = self
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::VisitOutsideContext)?;
        let goal_index = self
            .node_grid
            .index_of_coord(goal)
            .ok_or(Error::VisitOutsideContext)?;

        self.seq += 1;
        self.insertions = 0;
        self.priority_queue.clear();
        self.push(start_index, None, Zero::zero(), heuristic_fn(start, goal));

        let mut num_nodes_visited = 0;

        while let Some(current_entry) = self.priority_queue.pop() {
            let current_coord = {
                let node = &mut self.node_grid.raw_mut()[current_entry.node_index];
                if node.visited == self.seq {
                    continue;
                }
                node.visited = self.seq;
                node.from_parent = current_entry.from_parent;
                node.coord
            };

            num_nodes_visited += 1;

            if current_entry.node_index == goal_index {
                path::make_path(&self.node_grid, goal_index, path);
                trace!(
                    "path from {:?} to {:?} found after visiting {} nodes",
                    start,
                    goal,
                    num_nodes_visited
                );
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: current_entry.cost,
                    length: path.len(),
                });
            }

            let current_cell = match grid.get(current_coord) {
                Some(cell) => cell,
                None => continue,
            };

            for neighbour_coord in grid.neighbours(current_coord) {
                let neighbour_index = self
                    .node_grid
                    .index_of_coord(neighbour_coord)
                    .ok_or(Error::VisitOutsideContext)?;

                if self.node_grid.raw()[neighbour_index].visited == self.seq {
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

                let cost = current_entry.cost + edge_cost;
                let priority = cost + heuristic_fn(neighbour_coord, goal);
                self.push(neighbour_index, Some(current_entry.node_index), cost, priority);
            }
        }

        debug!(
            "no path from {:?} to {:?} after visiting {} nodes",
            start, goal, num_nodes_visited
        );

        Err(Error::NoPath)
    }
}
