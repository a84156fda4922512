use crate::grid::HexGrid;
use grid_2d::{Coord, Size};
use std::slice;

const ODD_ROW_OFFSETS: [(i32, i32); 6] = [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 0)];
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [(-1, -1), (0, -1), (1, 0), (0, 1), (-1, 1), (-1, 0)];

fn offsets_for_row(y: i32) -> &'static [(i32, i32); 6] {
    if y.rem_euclid(2) == 1 {
        &ODD_ROW_OFFSETS
    } else {
        &EVEN_ROW_OFFSETS
    }
}

/// The in-bounds neighbours of a cell, in offset-table order.
///
/// Going clockwise from the upper left, so odd and even rows yield the same
/// directions in the same positions.
#[derive(Debug, Clone)]
pub struct Neighbours {
    centre: Coord,
    size: Size,
    offsets: slice::Iter<'static, (i32, i32)>,
}

impl Neighbours {
    pub fn new(centre: Coord, size: Size) -> Self {
        Self {
            centre,
            size,
            offsets: offsets_for_row(centre.y).iter(),
        }
    }
}

impl Iterator for Neighbours {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        let size = self.size;
        let centre = self.centre;
        self.offsets
            .by_ref()
            .map(|&(dx, dy)| Coord::new(centre.x + dx, centre.y + dy))
            .find(|coord| coord.is_valid(size))
    }
}

impl<T> HexGrid<T> {
    pub fn neighbours(&self, coord: Coord) -> Neighbours {
        Neighbours::new(coord, self.size())
    }

    pub fn neighbours_xy(&self, x: i32, y: i32) -> Neighbours {
        self.neighbours(Coord::new(x, y))
    }
}
