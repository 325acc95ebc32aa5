use crate::units::{CellIndex, ColumnIndex, RowIndex, SideLength};


/// Row major index of a cell to its (row, column) on a square grid.
///
/// `None` when the index is past the last cell.
#[inline]
pub fn index_to_coordinate(index: CellIndex, side: SideLength) -> Option<(RowIndex, ColumnIndex)> {
    let (CellIndex(i), SideLength(s)) = (index, side);
    if i < s * s {
        Some((RowIndex(i / s), ColumnIndex(i % s)))
    } else {
        None
    }
}

/// (row, column) on a square grid to its row major index.
///
/// `None` when either coordinate falls outside the grid, callers substitute a
/// fully walled cell for it.
#[inline]
pub fn coordinate_to_index(row: RowIndex, column: ColumnIndex, side: SideLength) -> Option<CellIndex> {
    let (RowIndex(r), ColumnIndex(c), SideLength(s)) = (row, column, side);
    if r < s && c < s {
        Some(CellIndex(r * s + c))
    } else {
        None
    }
}

/// Same as `coordinate_to_index` for signed coordinates computed from a
/// render position, which may land before the first row or column.
#[inline]
pub fn signed_coordinate_to_index(row: isize, column: isize, side: SideLength) -> Option<CellIndex> {
    if row < 0 || column < 0 {
        None
    } else {
        coordinate_to_index(RowIndex(row as usize), ColumnIndex(column as usize), side)
    }
}
