//! lane-duel: run an input file of card duels and print the results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lane_duel::{session, Result, RulesConfig};

#[derive(Parser)]
#[command(name = "lane-duel")]
#[command(about = "Run two-player lane duels from an input file", long_about = None)]
struct Cli {
    /// Input file with decks, startup records and actions
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the JSON results (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON rules configuration; missing keys keep their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<RulesConfig> {
    match path {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(RulesConfig::default()),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let results = session::run_file(&cli.input, config)?;

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &results)?;
    writeln!(writer)?;
    writer.flush()?;

    info!(records = results.len(), "results written");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
