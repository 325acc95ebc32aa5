use crate::cells::{CompassPrimary, Walls};
use crate::grid::WallGrid;
use crate::units::{ColumnsCount, RowsCount};
use std::fmt;

const CHAR_PLUS: char = '+';
const CHAR_PIPE: char = '|';
const CHAR_SPACE: char = ' ';
const CHAR_NEWLINE: char = '\n';
const WALL_LR_3: &str = "---";
const OPEN_3: &str = "   ";

/// Lines in the text rendering of an `side` by `side` maze.
#[inline]
pub fn printed_rows(side: usize) -> RowsCount {
    RowsCount(2 * side + 1)
}

/// Characters per line in the text rendering, counting the line terminator.
#[inline]
pub fn printed_columns(side: usize) -> ColumnsCount {
    ColumnsCount(4 * side + 2)
}

/// Draw the maze as `+---+` / `|   |` text.
///
/// Odd lines draw the cell bodies with their east walls, even lines draw the
/// south walls and corner posts. Every cell is 4 characters wide and shares
/// its west boundary with the cell before it. The top line is always a closed
/// border whatever the grid says.
pub fn render_ascii<const S: usize>(grid: &WallGrid<S>) -> String {
    let RowsCount(rows) = printed_rows(S);
    let ColumnsCount(columns) = printed_columns(S);
    let mut output = String::with_capacity(rows * columns);

    for i in 0..rows {
        let is_drawing_row = i % 2 == 1;
        output.push(if is_drawing_row { CHAR_PIPE } else { CHAR_PLUS });

        // Each step covers the printed columns 4 * column + 1 ..= 4 * column + 4
        for column in 0..S {
            let cell = if i == 0 {
                Walls::CLOSED
            } else {
                grid.cell_or_closed(((i - 1) / 2) as isize, column as isize)
            };

            if is_drawing_row {
                output.push_str(OPEN_3);
                output.push(if cell.has_wall(CompassPrimary::East) { CHAR_PIPE } else { CHAR_SPACE });
            } else {
                output.push_str(if cell.has_wall(CompassPrimary::South) { WALL_LR_3 } else { OPEN_3 });
                output.push(CHAR_PLUS);
            }
        }

        output.push(CHAR_NEWLINE);
    }

    output
}

impl<const S: usize> fmt::Display for WallGrid<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render_ascii(self))
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators::binary_tree;
    use crate::grid::StandardGrid;
    use crate::units::{CellIndex, TokenId};
    use itertools::Itertools;
    use quickcheck::quickcheck;

    #[test]
    fn small_maze_text() {
        let g: WallGrid<3> = binary_tree(TokenId(0));
        let expected = "+---+---+---+\n\
                        |   |   |   |\n\
                        +   +   +   +\n\
                        |   |       |\n\
                        +   +---+   +\n\
                        |           |\n\
                        +---+---+---+\n";
        assert_eq!(render_ascii(&g), expected);
        assert_eq!(format!("{}", g), expected);
    }

    #[test]
    fn another_small_maze_text() {
        let g: WallGrid<3> = binary_tree(TokenId(7));
        let expected = "+---+---+---+\n\
                        |       |   |\n\
                        +---+   +   +\n\
                        |   |   |   |\n\
                        +   +   +   +\n\
                        |           |\n\
                        +---+---+---+\n";
        assert_eq!(render_ascii(&g), expected);
    }

    #[test]
    fn closed_grid_is_all_boxes() {
        let g = WallGrid::<2>::new();
        assert_eq!(render_ascii(&g), "+---+---+\n|   |   |\n+---+---+\n|   |   |\n+---+---+\n");
    }

    #[test]
    fn top_border_ignores_the_grid() {
        let g = WallGrid::<2>::from_rows([[Walls::empty(); 2]; 2]);
        let text = render_ascii(&g);
        assert_eq!(text.lines().next(), Some("+---+---+"));
        assert_eq!(text.lines().nth(1), Some("|        "));
    }

    #[test]
    fn token_zero_first_lines() {
        let g: StandardGrid = binary_tree(TokenId(0));
        let text = render_ascii(&g);
        let lines = text.lines().take(3).collect_vec();
        assert_eq!(lines[1],
                   "|   |   |   |   |               |                       |   |   |   |   |   |   |");
        assert_eq!(lines[2],
                   "+   +   +   +   +---+---+---+   +---+---+---+---+---+   +   +   +   +   +   +   +");
    }

    #[test]
    fn open_east_wall_prints_a_space() {
        let mut cells = [[Walls::CLOSED; 2]; 2];
        cells[1][0] = Walls::CLOSED.open(CompassPrimary::East);
        let g = WallGrid::<2>::from_rows(cells);
        let text = render_ascii(&g);
        assert_eq!(text.lines().nth(3), Some("|       |"));
        assert_eq!(g.get(CellIndex(2)), Some(Walls::CLOSED.open(CompassPrimary::East)));
    }

    #[test]
    fn quickcheck_border_and_dimensions() {
        fn p(token: u32) -> bool {
            let g: StandardGrid = binary_tree(TokenId(token));
            let text = render_ascii(&g);
            let lines = text.split_terminator('\n').collect_vec();
            let border = format!("+{}", "---+".repeat(20));
            text.len() == 41 * 82 &&
            lines.len() == 41 &&
            lines.iter().all(|line| line.len() == 81) &&
            lines[0] == border &&
            lines[40] == border &&
            text.ends_with('\n')
        }
        quickcheck(p as fn(u32) -> bool)
    }

    #[test]
    fn quickcheck_east_walls_print_pipes() {
        fn p(token: u32) -> bool {
            let g: StandardGrid = binary_tree(TokenId(token));
            let text = render_ascii(&g);
            let lines = text.lines().collect_vec();
            let ok = g.iter().enumerate().all(|(i, walls)| {
                let (row, column) = (i / 20, i % 20);
                let glyph = lines[2 * row + 1].as_bytes()[4 * column + 4];
                let south = lines[2 * row + 2].as_bytes()[4 * column + 1];
                (glyph == b'|') == walls.has_wall(CompassPrimary::East) &&
                (south == b'-') == walls.has_wall(CompassPrimary::South)
            });
            ok
        }
        quickcheck(p as fn(u32) -> bool)
    }
}
