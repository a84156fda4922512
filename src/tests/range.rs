use super::{enter_cost, grid_from_rows, hex_distance};
use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::range::*;
use grid_2d::{Coord, Size};
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

fn results(triples: &[(i32, i32, f64)]) -> Vec<RangeResult<f64>> {
    let mut results: Vec<_> = triples
        .iter()
        .map(|&(x, y, cost)| RangeResult {
            coord: Coord::new(x, y),
            cost,
        })
        .collect();
    sort_range_results(&mut results);
    results
}

fn common_test(
    rows: &[[f64; 4]],
    start: (i32, i32),
    max_cost: f64,
    include_start: bool,
    expected: &[(i32, i32, f64)],
) {
    let grid = grid_from_rows(rows);
    let mut found = grid.find_in_range(Coord::new(start.0, start.1), max_cost, include_start, enter_cost);
    sort_range_results(&mut found);
    assert_eq!(found, results(expected));
}

#[test]
fn uniform() {
    common_test(
        &[[1.0; 4]; 4],
        (1, 0),
        2.0,
        false,
        &[
            (0, 0, 1.0),
            (2, 0, 1.0),
            (0, 1, 1.0),
            (1, 1, 1.0),
            (0, 2, 2.0),
            (1, 2, 2.0),
            (2, 2, 2.0),
            (2, 1, 2.0),
            (3, 0, 2.0),
        ],
    );
}

#[test]
fn uniform_include_start() {
    common_test(
        &[[1.0; 4]; 4],
        (1, 0),
        2.0,
        true,
        &[
            (1, 0, 0.0),
            (0, 0, 1.0),
            (2, 0, 1.0),
            (0, 1, 1.0),
            (1, 1, 1.0),
            (0, 2, 2.0),
            (1, 2, 2.0),
            (2, 2, 2.0),
            (2, 1, 2.0),
            (3, 0, 2.0),
        ],
    );
}

#[test]
fn nonuniform() {
    common_test(
        &[
            [1.0, 1.0, 5.0, 1.0],
            [9.0, 1.0, 5.0, 1.0],
            [1.0, 1.0, 3.0, 1.0],
            [9.0, 9.0, 1.0, 1.0],
        ],
        (0, 2),
        5.0,
        false,
        &[
            (1, 2, 1.0),
            (2, 2, 4.0),
            (3, 2, 5.0),
            (2, 3, 5.0),
            (1, 1, 2.0),
            (1, 0, 3.0),
            (0, 0, 4.0),
        ],
    );
}

#[test]
fn impassable() {
    common_test(
        &[
            [-1.0, -1.0, -1.0, -1.0],
            [1.0, 1.0, 1.0, 1.0],
            [-1.0, -1.0, -1.0, -1.0],
            [-1.0, -1.0, -1.0, -1.0],
        ],
        (0, 1),
        500.0,
        false,
        &[(1, 1, 1.0), (2, 1, 2.0), (3, 1, 3.0)],
    );
}

#[test]
fn zero_budget() {
    common_test(&[[1.0; 4]; 4], (2, 2), 0.0, false, &[]);
    common_test(&[[1.0; 4]; 4], (2, 2), 0.0, true, &[(2, 2, 0.0)]);
}

#[test]
fn start_outside_grid() {
    let grid = grid_from_rows(&[[1.0; 4]; 4]);
    assert!(grid.find_in_range(Coord::new(4, 4), 10.0, true, enter_cost).is_empty());

    let mut ctx = RangeContext::new(grid.size());
    let mut found = Vec::new();
    let result = ctx.find_in_range(
        &grid,
        Coord::new(-1, 0),
        RangeConfig::new(10.0),
        enter_cost,
        &mut found,
    );
    assert_eq!(result, Err(Error::StartOutsideGrid));
}

#[test]
fn context_too_small() {
    let grid = grid_from_rows(&[[1.0; 4]; 4]);
    let mut ctx = RangeContext::new(Size::new(2, 2));
    let mut found = vec![RangeResult {
        coord: Coord::new(3, 3),
        cost: 9.0,
    }];
    let result = ctx.find_in_range(
        &grid,
        Coord::new(0, 0),
        RangeConfig::new(10.0).with_start(),
        enter_cost,
        &mut found,
    );
    assert_eq!(result, Err(Error::VisitOutsideContext));
    assert!(found.is_empty());
}

#[test]
fn nan_cost_is_impassable() {
    common_test(
        &[
            [1.0, 1.0, 1.0, 1.0],
            [::std::f64::NAN; 4],
            [1.0, 1.0, 1.0, 1.0],
        ],
        (0, 0),
        10.0,
        false,
        &[(1, 0, 1.0), (2, 0, 2.0), (3, 0, 3.0)],
    );
}

#[test]
fn context_reuse() {
    let grid = grid_from_rows(&[[1.0; 4]; 4]);
    let mut ctx = RangeContext::new(grid.size());
    let mut found = Vec::new();

    let metadata = ctx
        .find_in_range(&grid, Coord::new(0, 0), RangeConfig::new(1.0), enter_cost, &mut found)
        .unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(metadata.num_nodes_visited, 3);

    ctx.find_in_range(
        &grid,
        Coord::new(3, 3),
        RangeConfig::new(1.0).with_start(),
        enter_cost,
        &mut found,
    )
    .unwrap();
    sort_range_results(&mut found);
    assert_eq!(found, results(&[(3, 3, 0.0), (2, 3, 1.0), (3, 2, 1.0)]));
}

#[test]
fn best_in_range() {
    let grid = grid_from_rows(&[
        [1.0, 1.0, 5.0, 1.0],
        [9.0, 1.0, 5.0, 1.0],
        [1.0, 1.0, 3.0, 1.0],
        [9.0, 9.0, 1.0, 1.0],
    ]);
    let start = Coord::new(0, 2);
    let is_three = |_: Coord, &cell: &f64| cell == 3.0;

    let best = grid.find_best_in_range(start, RangeConfig::new(5.0), enter_cost, is_three);
    assert_eq!(
        best,
        Some(RangeResult {
            coord: Coord::new(2, 2),
            cost: 4.0,
        })
    );

    let best = grid.find_best_in_range(start, RangeConfig::new(3.0), enter_cost, is_three);
    assert_eq!(best, None);
}

#[test]
fn best_in_range_prefers_first_reached() {
    let grid = grid_from_rows(&[[1.0; 4]; 4]);
    let on_left_edge = |coord: Coord, _: &f64| coord.x == 0;

    let best = grid.find_best_in_range(Coord::new(1, 0), RangeConfig::new(3.0), enter_cost, on_left_edge);
    assert_eq!(
        best,
        Some(RangeResult {
            coord: Coord::new(0, 1),
            cost: 1.0,
        })
    );

    let best = grid.find_best_in_range(
        Coord::new(0, 0),
        RangeConfig::new(3.0).with_start(),
        enter_cost,
        on_left_edge,
    );
    assert_eq!(
        best,
        Some(RangeResult {
            coord: Coord::new(0, 0),
            cost: 0.0,
        })
    );
}

#[test]
fn uniform_range_is_step_distance() {
    let grid = HexGrid::generate(9, 8, |_| ());
    let start = Coord::new(4, 3);
    let mut previous = Vec::new();

    for max_cost in 0..6 {
        let mut found = grid.find_in_range(start, max_cost, false, |_, _| 1);
        found.sort_by_key(|r| (r.coord.y, r.coord.x));

        let expected: Vec<_> = grid
            .enumerate()
            .map(|(coord, _)| coord)
            .filter(|&coord| coord != start && hex_distance(start, coord) <= max_cost)
            .map(|coord| RangeResult {
                coord,
                cost: hex_distance(start, coord),
            })
            .collect();
        assert_eq!(found, expected);

        for result in &previous {
            assert!(found.contains(result));
        }
        previous = found;
    }
}

#[test]
fn random_grids() {
    const COSTS: [f64; 5] = [-1.0, 0.0, 1.0, 2.0, 3.0];
    let mut rng = IsaacRng::seed_from_u64(0x7261);

    for _ in 0..200 {
        let grid = HexGrid::generate(8, 7, |_| COSTS[rng.gen_range(0..COSTS.len())]);
        let start = Coord::new(rng.gen_range(0..8), rng.gen_range(0..7));
        let max_cost = rng.gen_range(0..8) as f64;

        let mut without_start = grid.find_in_range(start, max_cost, false, enter_cost);
        let mut with_start = grid.find_in_range(start, max_cost, true, enter_cost);

        assert!(without_start.iter().all(|r| r.cost <= max_cost && r.cost >= 0.0));
        assert!(without_start.iter().all(|r| r.coord != start));

        let mut coords: Vec<_> = with_start.iter().map(|r| (r.coord.y, r.coord.x)).collect();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), with_start.len());

        without_start.push(RangeResult {
            coord: start,
            cost: 0.0,
        });
        sort_range_results(&mut without_start);
        sort_range_results(&mut with_start);
        assert_eq!(with_start, without_start);
    }
}
