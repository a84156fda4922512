use grid_2d::{Coord, Grid};

pub(crate) trait PathNode {
    fn from_parent(&self) -> Option<usize>;
    fn coord(&self) -> Coord;
}

/// Follows parent links back from `goal_index`, writing the path into `path`
/// ordered from the origin to the goal, both included.
pub(crate) fn make_path<N: PathNode>(node_grid: &Grid<N>, goal_index: usize, path: &mut Vec<Coord>) {
    path.clear();
    let mut index = goal_index;
    loop {
        let node = &node_grid.raw()[index];
        path.push(node.coord());
        match node.from_parent() {
            Some(parent_index) => index = parent_index,
            None => break,
        }
    }
    path.reverse();
}
