use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use enigma::{driver, MachineConfig};

/// Enciphers and deciphers messages with a rotor cipher machine.
///
/// Input lines starting with `*` set the machine up; every other line is
/// converted and printed in groups of five.
#[derive(Parser)]
#[command(name = "enigma", version, long_about = None)]
struct Cli {
    /// Machine description: alphabet, rotor and pawl counts, rotor catalog.
    config: PathBuf,
    /// Messages to process (default: standard input).
    input: Option<PathBuf>,
    /// Where to write the results (default: standard output).
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = fs::read_to_string(&cli.config)
        .with_context(|| format!("could not open {}", cli.config.display()))?;
    let config = MachineConfig::parse(&text)
        .with_context(|| format!("bad machine description {}", cli.config.display()))?;

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    driver::process(&config, input, output)?;
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("could not open {}", path.display()))
}
