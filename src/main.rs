use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use gcjtrans::gpx::{convert_file_with, default_output_path};
use gcjtrans::Converter;

/// Converts coordinates of a GPX file between BD-09, GCJ-02 and WGS 84.
#[derive(Parser, Debug)]
#[command(name = "gcjtrans", version)]
struct Cli {
    /// Input GPX file
    input: PathBuf,
    /// Source coordinate system: bd09, gcj02 or wgs84
    src: String,
    /// Target coordinate system: bd09, gcj02 or wgs84
    dst: String,
    /// Output GPX file, defaults to `<INPUT stem>_<DST>.gpx`
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// More logging, repeat for more (overridden by RUST_LOG)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> anyhow::Result<(usize, PathBuf)> {
    let converter = Converter::from_tags(&cli.src, &cli.dst)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, converter.target()));
    debug!("output: {}", output.display());

    let count = convert_file_with(&cli.input, &output, &converter)
        .with_context(|| format!("failed to convert '{}'", cli.input.display()))?;

    Ok((count, output))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok((count, output)) => {
            println!("converted {count} points: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
