use crate::grid::HexGrid;
use grid_2d::Coord;

mod range;

/// Builds a grid whose payload at (x, y) is `rows[y][x]`.
fn grid_from_rows(rows: &[[f64; 4]]) -> HexGrid<f64> {
    HexGrid::generate(4, rows.len() as u32, |coord| {
        rows[coord.y as usize][coord.x as usize]
    })
}

/// Cost of a move is the payload of the cell being entered.
fn enter_cost(_from: &f64, to: &f64) -> f64 {
    *to
}

/// Step distance between two cells, via axial coordinates.
fn hex_distance(a: Coord, b: Coord) -> i32 {
    let to_axial = |c: Coord| (c.x - (c.y - (c.y & 1)) / 2, c.y);
    let (aq, ar) = to_axial(a);
    let (bq, br) = to_axial(b);
    let dq = aq - bq;
    let dr = ar - br;
    (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
}
