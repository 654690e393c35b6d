//! CLI entry point for photomosaic generation

use clap::Parser;
use mosatile::io::cli::{Cli, MosaicProcessor};

fn main() -> mosatile::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
