use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nozoki_core::seed::{SeedChoice, runtime_seed};
use nozoki_core::{DungeonConfig, DungeonGenerator};
use nozoki_tools::{ascii, config_file, dump::DungeonDump, format_fingerprint, logging};
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generates a dungeon and prints it", long_about = None)]
struct Args {
    /// Seed for the generator; a runtime seed is used when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML config file; defaults to config.toml in the project config dir
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Depth budget for each top-level branch pass
    #[arg(long)]
    depth: Option<u32>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => config_file::load(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => match config_file::default_path() {
            Some(path) => config_file::load_or_default(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?,
            None => DungeonConfig::default(),
        },
    };

    if let Some(depth) = args.depth {
        config.branch_depth = depth;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    let seed = SeedChoice::resolve(args.seed, runtime_seed);
    info!(%seed, "generating dungeon");

    let mut generator =
        DungeonGenerator::from_seed(config, seed.seed()).with_context(|| "Invalid dungeon config")?;
    let dungeon = generator.generate();

    match args.format {
        OutputFormat::Ascii => {
            print!("{}", ascii::render(&dungeon.grid));
            println!("seed: {}", seed.seed());
            println!("fingerprint: {}", format_fingerprint(dungeon.grid.fingerprint()));
            println!("rooms carved: {}", dungeon.report.rooms_carved);
        }
        OutputFormat::Json => {
            let dump = DungeonDump::new(seed.seed(), &dungeon);
            let json = serde_json::to_string_pretty(&dump)
                .with_context(|| "Failed to serialize dungeon JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}
