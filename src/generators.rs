use crate::cells::{CompassPrimary, Walls};
use crate::grid::WallGrid;
use crate::grid_coordinates::index_to_coordinate;
use crate::lcg::SemiRandom;
use crate::units::{CellIndex, ColumnIndex, RowIndex, TokenId};

/// Apply the binary tree maze generation algorithm to a fresh grid seeded by `token`.
///
/// Each cell, visited in row major order, knocks down either its south or its east
/// wall depending on a coin flip drawn from the token's semi random sequence.
/// When the chosen direction runs off the grid the other one is used instead, so only
/// the bottom right cell keeps both walls.
/// The same token always gives the same maze.
pub fn binary_tree<const S: usize>(token: TokenId) -> WallGrid<S> {
    binary_tree_observed(token, |_, _| {})
}

/// `binary_tree` that also hands `observer` the partially built grid once per cell,
/// just before that cell's walls are stored.
pub fn binary_tree_observed<const S: usize, F>(token: TokenId, mut observer: F) -> WallGrid<S>
    where F: FnMut(CellIndex, &WallGrid<S>)
{
    let mut grid = WallGrid::<S>::new();
    let mut rng = SemiRandom::new(u64::from(token.0));
    rng.advance();

    for i in 0..grid.size() {
        let index = CellIndex(i);
        let go_south = coin_flip(rng.advance());
        let walls = match index_to_coordinate(index, grid.side()) {
            Some((row, column)) => carve::<S>(row, column, go_south),
            None => Walls::CLOSED,
        };

        observer(index, &grid);
        grid.set(index, walls);
    }

    grid
}

/// The threshold is over `state mod 1000`, not the full range of the generator.
/// Changing it would change every published maze.
#[inline]
fn coin_flip(state: u64) -> bool {
    (state % 1000) >= 500
}

fn carve<const S: usize>(row: RowIndex, column: ColumnIndex, go_south: bool) -> Walls {
    let below_last_row = row.0 + 1 < S;
    let before_last_column = column.0 + 1 < S;

    let (first, first_possible, second, second_possible) = if go_south {
        (CompassPrimary::South, below_last_row, CompassPrimary::East, before_last_column)
    } else {
        (CompassPrimary::East, before_last_column, CompassPrimary::South, below_last_row)
    };

    if first_possible {
        Walls::CLOSED.open(first)
    } else if second_possible {
        Walls::CLOSED.open(second)
    } else {
        Walls::CLOSED
    }
}
