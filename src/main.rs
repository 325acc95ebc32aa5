use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use blockmazes::{
    generators,
    grid::StandardGrid,
    grid_displays,
    items::{AssemblerConfig, ItemAssembler},
    renderers,
    units::TokenId,
};
use std::path::PathBuf;

const USAGE: &str = "BlockMazes

Usage:
    blockmazes -h | --help
    blockmazes [--count=<n>] [--first=<id>] [--out-dir=<path>] [--mask-dir=<path>] [--mask-count=<n>] [--template=<path>] [--base-url=<url>] [--snapshots]
    blockmazes show <id> [--solid]

Options:
    -h --help            Show this screen.
    --count=<n>          How many consecutive tokens to write [default: 256].
    --first=<id>         The first token id [default: 0].
    --out-dir=<path>     Directory that receives one sub directory per token [default: out].
    --mask-dir=<path>    Directory of mask images named 0.jpg, 1.jpg, ... [default: masks].
    --mask-count=<n>     Number of mask images tokens cycle through, 0 for none [default: 30].
    --template=<path>    Handlebars template of the item page [default: templates/index.html].
    --base-url=<url>     URL the item image, animation and page links start with [default: https://blockmazing.com/m].
    --snapshots          Also write the maze text before each cell is carved.
    --solid              Print the OpenSCAD model instead of the text maze.
";

#[derive(Debug, Deserialize)]
struct Args {
    cmd_show: bool,
    arg_id: Option<u32>,
    flag_solid: bool,
    flag_count: u32,
    flag_first: u32,
    flag_out_dir: String,
    flag_mask_dir: String,
    flag_mask_count: u32,
    flag_template: String,
    flag_base_url: String,
    flag_snapshots: bool,
}

impl Args {
    fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            out_dir: PathBuf::from(&self.flag_out_dir),
            mask_dir: PathBuf::from(&self.flag_mask_dir),
            mask_count: self.flag_mask_count,
            template: PathBuf::from(&self.flag_template),
            base_url: self.flag_base_url.clone(),
            snapshots: self.flag_snapshots,
        }
    }
}

mod errors {
    // The library's errors plus the argument parsing failures of the driver.
    use error_chain::*;
    error_chain! {

        links {
            Maze(::blockmazes::errors::Error, ::blockmazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    if args.cmd_show {
        let id = args.arg_id.ok_or("show needs a token id")?;
        let grid: StandardGrid = generators::binary_tree(TokenId(id));
        if args.flag_solid {
            print!("{}", renderers::render_solid(&grid));
        } else {
            print!("{}", grid_displays::render_ascii(&grid));
        }
        return Ok(());
    }

    let end = args.flag_first
                  .checked_add(args.flag_count)
                  .ok_or("--first plus --count is past the largest token id")?;
    let config = args.assembler_config();
    info!("writing tokens {}..{} to {}", args.flag_first, end, config.out_dir.display());

    let assembler = ItemAssembler::new(config)?;
    let written = assembler.assemble_all((args.flag_first..end).map(TokenId))
                           .chain_err(|| "Failed to write maze items")?;

    info!("{} items written", written);
    Ok(())
}
