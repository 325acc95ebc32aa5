use crate::cells::{CompassPrimary, Walls};
use crate::grid_coordinates::{coordinate_to_index, index_to_coordinate, signed_coordinate_to_index};
use crate::units::{CellIndex, ColumnIndex, RowIndex, SideLength};


/// Cells along each side of the mazes that get published.
pub const MAZE_SIZE: usize = 20;

/// The wall grid every token gets.
pub type StandardGrid = WallGrid<MAZE_SIZE>;

/// Wall masks of an `S` by `S` maze.
///
/// The storage is a fixed size array so a grid always holds exactly `S * S`
/// cells. Cells are addressed row major, index = row * S + column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct WallGrid<const S: usize> {
    cells: [[Walls; S]; S],
}

impl<const S: usize> WallGrid<S> {
    pub const SIDE: SideLength = SideLength(S);

    /// A grid with every wall of every cell standing.
    pub fn new() -> WallGrid<S> {
        WallGrid { cells: [[Walls::CLOSED; S]; S] }
    }

    pub fn from_rows(cells: [[Walls; S]; S]) -> WallGrid<S> {
        WallGrid { cells }
    }

    #[inline]
    pub fn side(&self) -> SideLength {
        Self::SIDE
    }

    #[inline]
    pub fn size(&self) -> usize {
        S * S
    }

    #[inline]
    pub fn get(&self, index: CellIndex) -> Option<Walls> {
        index_to_coordinate(index, Self::SIDE).map(|(row, column)| self.cells[row.0][column.0])
    }

    #[inline]
    pub fn get_at(&self, row: RowIndex, column: ColumnIndex) -> Option<Walls> {
        coordinate_to_index(row, column, Self::SIDE).and_then(|index| self.get(index))
    }

    /// The cell at a possibly out of range coordinate, anything outside the
    /// grid reads as a fully walled cell.
    #[inline]
    pub fn cell_or_closed(&self, row: isize, column: isize) -> Walls {
        signed_coordinate_to_index(row, column, Self::SIDE)
            .and_then(|index| self.get(index))
            .unwrap_or(Walls::CLOSED)
    }

    /// Overwrite one cell. Returns false, changing nothing, if the index is
    /// outside the grid.
    pub(crate) fn set(&mut self, index: CellIndex, walls: Walls) -> bool {
        match index_to_coordinate(index, Self::SIDE) {
            Some((row, column)) => {
                self.cells[row.0][column.0] = walls;
                true
            }
            None => false,
        }
    }

    /// Cells in row major order.
    pub fn iter(&self) -> impl Iterator<Item = Walls> + '_ {
        self.cells.iter().flat_map(|row| row.iter().cloned())
    }

    pub fn iter_row(&self) -> impl Iterator<Item = &[Walls; S]> + '_ {
        self.cells.iter()
    }

    /// How many cells had the wall on one side knocked down.
    pub fn opened_count(&self, direction: CompassPrimary) -> usize {
        self.iter().filter(|walls| walls.is_open(direction)).count()
    }
}

impl<const S: usize> Default for WallGrid<S> {
    fn default() -> Self {
        WallGrid::new()
    }
}
