//! **blockmazes** generates a fixed catalogue of maze collectibles from token ids.
//!
//! Each token seeds a binary tree maze which is drawn as `+---+` text and as an
//! OpenSCAD block model, then published with JSON metadata and an HTML page.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_coordinates;
pub mod grid_displays;
pub mod items;
pub mod lcg;
pub mod renderers;
pub mod units;
