//! Turns token ids into published maze items on disk.
//!
//! Every token gets its own directory holding the text and OpenSCAD renders,
//! the SHA-1 of the text render, a JSON metadata record, an HTML page expanded
//! from a template and a copy of one of the shared mask images.

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use log::{debug, info, warn};
use serde_derive::Serialize;
use sha1::{Digest, Sha1};

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::generators::{binary_tree, binary_tree_observed};
use crate::grid::StandardGrid;
use crate::grid_displays::render_ascii;
use crate::renderers::render_solid;
use crate::units::TokenId;

const PAGE_TEMPLATE: &str = "item";
const DISPLAY_NAME: &str = "BlockMazing";

/// Where items are written and what they link to.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    pub out_dir: PathBuf,
    pub mask_dir: PathBuf,
    /// Tokens cycle through this many mask images.
    pub mask_count: u32,
    pub template: PathBuf,
    pub base_url: String,
    /// Also write the partially built maze before every cell is carved.
    pub snapshots: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        AssemblerConfig {
            out_dir: PathBuf::from("out"),
            mask_dir: PathBuf::from("masks"),
            mask_count: 30,
            template: PathBuf::from("templates/index.html"),
            base_url: String::from("https://blockmazing.com/m"),
            snapshots: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitAttribute {
    pub trait_type: String,
    pub display_type: String,
    pub value: usize,
}

impl TraitAttribute {
    fn number(trait_type: &str, value: usize) -> TraitAttribute {
        TraitAttribute {
            trait_type: String::from(trait_type),
            display_type: String::from("number"),
            value,
        }
    }
}

/// The metadata record of one item, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMetadata {
    pub name: String,
    pub num: String,
    pub id: String,
    pub description: String,
    pub image: String,
    pub animation_url: String,
    pub external_url: String,
    pub maze_string: String,
    pub maze_sha: String,
    pub attributes: Vec<TraitAttribute>,
}

impl ItemMetadata {
    pub fn new(token: TokenId,
               base_url: &str,
               grid: &StandardGrid,
               maze_string: String,
               maze_sha: String)
               -> ItemMetadata {
        let TokenId(id) = token;
        let name = format!("{} #{:03}", DISPLAY_NAME, id);
        let item_url = format!("{}/{}", base_url.trim_end_matches('/'), id);

        ItemMetadata {
            name: name.clone(),
            num: format!("{:03}", id),
            id: id.to_string(),
            description: name,
            image: format!("{}/maze.png", item_url),
            animation_url: format!("{}/maze.mp4", item_url),
            external_url: format!("{}/", item_url),
            maze_string,
            maze_sha,
            attributes: vec![
                TraitAttribute::number("South turns", grid.opened_count(CompassPrimary::South)),
                TraitAttribute::number("East turns", grid.opened_count(CompassPrimary::East)),
            ],
        }
    }
}

/// Lowercase hex SHA-1 of a maze render, newline terminated as it is stored.
pub fn maze_sha(maze_string: &str) -> String {
    format!("{:x}\n", Sha1::digest(maze_string.as_bytes()))
}

pub struct ItemAssembler {
    config: AssemblerConfig,
    templates: Handlebars<'static>,
}

impl ItemAssembler {
    /// Load the page template named in the config.
    pub fn new(config: AssemblerConfig) -> Result<ItemAssembler> {
        let template = fs::read_to_string(&config.template)
            .chain_err(|| format!("Failed to read page template {}", config.template.display()))?;
        ItemAssembler::with_template(config, &template)
    }

    pub fn with_template(config: AssemblerConfig, template: &str) -> Result<ItemAssembler> {
        let mut templates = Handlebars::new();
        templates.set_strict_mode(true);
        templates.register_escape_fn(handlebars::no_escape);
        templates.register_template_string(PAGE_TEMPLATE, template)
                 .chain_err(|| "Failed to parse page template")?;

        Ok(ItemAssembler { config, templates })
    }

    #[inline]
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn item_dir(&self, token: TokenId) -> PathBuf {
        self.config.out_dir.join(token.0.to_string())
    }

    /// Write every item in turn, stopping at the first failure.
    pub fn assemble_all<I>(&self, tokens: I) -> Result<usize>
        where I: IntoIterator<Item = TokenId>
    {
        let mut count = 0;
        for token in tokens {
            self.assemble(token)?;
            count += 1;
        }
        Ok(count)
    }

    /// Generate one maze and write all of its files.
    pub fn assemble(&self, token: TokenId) -> Result<ItemMetadata> {
        let TokenId(id) = token;
        let dir = self.item_dir(token);
        fs::create_dir_all(&dir)
            .chain_err(|| format!("Failed to create item directory {}", dir.display()))?;

        self.copy_mask(token, &dir)?;

        let grid = if self.config.snapshots {
            self.build_with_snapshots(token, &dir)?
        } else {
            binary_tree(token)
        };

        let maze_string = render_ascii(&grid);
        write_item_file(&dir.join(format!("{}-final.txt", id)), &maze_string)?;

        let sha = maze_sha(&maze_string);
        write_item_file(&dir.join(format!("{}-final.txt.sha1", id)), &sha)?;

        write_item_file(&dir.join("maze.scad"), &render_solid(&grid))?;

        let metadata = ItemMetadata::new(token, &self.config.base_url, &grid, maze_string, sha);
        let json = serde_json::to_string(&metadata)?;
        write_item_file(&dir.join(format!("{}.json", id)), &json)?;

        let page = self.templates
                       .render(PAGE_TEMPLATE, &metadata)
                       .chain_err(|| format!("Failed to render page for item {}", id))?;
        write_item_file(&dir.join("index.html"), &page)?;

        info!("{} written, sha1 {}", metadata.name, metadata.maze_sha.trim_end());
        Ok(metadata)
    }

    fn copy_mask(&self, token: TokenId, dir: &Path) -> Result<()> {
        if self.config.mask_count == 0 {
            return Ok(());
        }

        let source = self.config.mask_dir.join(format!("{}.jpg", token.0 % self.config.mask_count));
        if !source.is_file() {
            warn!("No mask image at {}, item {} goes without", source.display(), token.0);
            return Ok(());
        }

        let destination = dir.join("mask.jpg");
        fs::copy(&source, &destination)
            .chain_err(|| format!("Failed to copy mask {} to {}", source.display(), destination.display()))?;
        debug!("copied {} to {}", source.display(), destination.display());
        Ok(())
    }

    fn build_with_snapshots(&self, token: TokenId, dir: &Path) -> Result<StandardGrid> {
        let mut first_error = None;
        let grid = binary_tree_observed(token, |index, partial: &StandardGrid| {
            if first_error.is_none() {
                let path = dir.join(format!("{}-{:03}.txt", token.0, index.0));
                if let Err(e) = write_item_file(&path, &render_ascii(partial)) {
                    first_error = Some(e);
                }
            }
        });

        match first_error {
            Some(e) => Err(e),
            None => Ok(grid),
        }
    }
}

fn write_item_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).chain_err(|| format!("Failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(())
}
