use itertools::iproduct;

use crate::cells::CompassPrimary;
use crate::grid::WallGrid;

/// Settings for the OpenSCAD rendering of a maze.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidRenderOptions {
    wall_height: usize,
    cube_size: String,
}

impl Default for SolidRenderOptions {
    fn default() -> Self {
        SolidRenderOptionsBuilder::new().build()
    }
}

impl SolidRenderOptions {
    #[inline]
    pub fn wall_height(&self) -> usize {
        self.wall_height
    }

    #[inline]
    pub fn cube_size(&self) -> &str {
        &self.cube_size
    }
}

#[derive(Debug)]
pub struct SolidRenderOptionsBuilder {
    options: SolidRenderOptions,
}

impl SolidRenderOptionsBuilder {
    pub fn new() -> SolidRenderOptionsBuilder {
        SolidRenderOptionsBuilder {
            options: SolidRenderOptions {
                wall_height: 5,
                cube_size: String::from("1.0"),
            },
        }
    }

    /// Number of cubes stacked on the floor wherever a wall stands.
    pub fn wall_height(mut self, height: usize) -> Self {
        self.options.wall_height = height;
        self
    }

    /// Edge length of every cube, written verbatim into the script.
    pub fn cube_size(mut self, size: &str) -> Self {
        self.options.cube_size = String::from(size);
        self
    }

    pub fn build(self) -> SolidRenderOptions {
        self.options
    }
}

impl Default for SolidRenderOptionsBuilder {
    fn default() -> Self {
        SolidRenderOptionsBuilder::new()
    }
}

/// Side of the square plane of blocks a maze with `side` cells per side becomes.
#[inline]
pub fn plane_size(side: usize) -> usize {
    2 * side + 1
}

/// OpenSCAD script of the maze as unit cubes with the default options.
pub fn render_solid<const S: usize>(grid: &WallGrid<S>) -> String {
    render_solid_with(grid, &SolidRenderOptions::default())
}

/// OpenSCAD script of the maze as stacked cubes.
///
/// The maze becomes a `2S + 1` square plane: odd positions are cell interiors,
/// even positions the walls and posts between them. Every plane position gets a
/// black floor cube at height 0. The outer border always gets a wall stack, an
/// inner wall position gets one only while the matching south or east wall of
/// the grid is still standing.
pub fn render_solid_with<const S: usize>(grid: &WallGrid<S>, options: &SolidRenderOptions) -> String {
    let n = plane_size(S);
    let mut output = String::new();

    for (i, j) in iproduct!(0..n, 0..n) {
        output.push_str(&floor_statement(i, j, options));

        if wall_stands_at(grid, i, j) {
            output.push_str(&wall_stack(i, j, options));
        }
    }

    output
}

fn wall_stands_at<const S: usize>(grid: &WallGrid<S>, i: usize, j: usize) -> bool {
    let last = plane_size(S) - 1;
    if i == 0 || i == last || j == 0 || j == last {
        return true;
    }

    let (i_even, j_even) = (i % 2 == 0, j % 2 == 0);
    if !i_even && !j_even {
        return false;
    }

    let cell = grid.cell_or_closed(((i - 1) / 2) as isize, ((j - 1) / 2) as isize);
    (i_even && cell.has_wall(CompassPrimary::South)) ||
    (j_even && cell.has_wall(CompassPrimary::East))
}

fn floor_statement(i: usize, j: usize, options: &SolidRenderOptions) -> String {
    format!("translate([{}, {}, 0]) {{color([0,0,0]) cube({});}};\n", i, j, options.cube_size)
}

fn wall_stack(i: usize, j: usize, options: &SolidRenderOptions) -> String {
    (1..=options.wall_height)
        .map(|h| format!("translate([{}, {}, {}]) {{cube({});}};\n", i, j, h, options.cube_size))
        .collect()
}
