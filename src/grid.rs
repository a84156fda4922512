use grid_2d::{Coord, Grid, Size};
use num_traits::Zero;

/// A fixed-size hexagonal grid in offset coordinates.
///
/// Cells are stored densely in row-major order. Odd rows are shifted half a
/// cell to the right relative to even rows, which determines adjacency (see
/// `neighbours`).
#[derive(Debug, Clone)]
pub struct HexGrid<T> {
    cells: Grid<T>,
}

impl<T> HexGrid<T> {
    /// Builds a grid by calling `f` once per coordinate, rows first.
    pub fn generate<F>(width: u32, height: u32, f: F) -> Self
    where
        F: FnMut(Coord) -> T,
    {
        Self::new_fn(Size::new(width, height), f)
    }

    pub fn new_fn<F>(size: Size, f: F) -> Self
    where
        F: FnMut(Coord) -> T,
    {
        Self {
            cells: Grid::new_fn(size, f),
        }
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn dims(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of_coord(coord).is_some()
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.cells.get(coord)
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.cells.get_mut(coord)
    }

    pub fn get_xy(&self, x: i32, y: i32) -> Option<&T> {
        self.get(Coord::new(x, y))
    }

    pub fn get_xy_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.get_mut(Coord::new(x, y))
    }

    /// Visits every cell in row-major order, allowing it to be modified.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(Coord, &mut T),
    {
        for (coord, cell) in self.cells.enumerate_mut() {
            f(coord, cell);
        }
    }

    pub fn enumerate(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.cells.enumerate()
    }

    pub(crate) fn index_of_coord(&self, coord: Coord) -> Option<usize> {
        self.cells.index_of_coord(coord)
    }
}

/// Orders coordinates row by row, left to right within a row.
pub fn sort_coords(coords: &mut [Coord]) {
    coords.sort_by_key(|coord| (coord.y, coord.x));
}

/// Edge costs below zero (and NaN) mark the edge as impassable.
pub(crate) fn is_passable<Cost: PartialOrd + Zero>(cost: &Cost) -> bool {
    *cost >= Zero::zero()
}
