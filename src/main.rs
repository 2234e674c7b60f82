use anyhow::Context;
use clap::Parser;
use colormapgen::utils::status::print_build_summary;
use colormapgen::{ColormapBuilder, ColormapTable, Config};
use std::path::PathBuf;

/// Regenerates the biome colormap textures.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory the PNGs are written to (must already exist)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file replacing the built-in colormap table
    #[arg(long)]
    table: Option<PathBuf>,

    /// Skip the progress bar and summary table
    #[arg(long)]
    no_summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    config.summary = !cli.no_summary;

    let table = match &cli.table {
        Some(path) => ColormapTable::from_json_file(path)
            .with_context(|| format!("loading table {}", path.display()))?,
        None => ColormapTable::builtin()?,
    };

    let builder = ColormapBuilder::new(config.clone(), table);
    let report = builder.build().context("colormap build failed")?;

    if config.summary {
        print_build_summary(&report, builder.table());
    }
    println!("Done");
    Ok(())
}
