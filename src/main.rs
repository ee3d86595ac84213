use clap::Parser;
use owo_colors::OwoColorize;
use std::{path::PathBuf, process};
use thiserror::Error;

mod document;
mod emit;

use emit::FileFormat;

const DEFAULT_SOURCE: &str = "config/config.yaml";
const DEFAULT_OUT_DIR: &str = "target";

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Source YAML file
    #[clap(short, long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// Output directory for config.yaml and config.json (must exist)
    #[clap(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    /// Don't report written files on stderr
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{} {}", "error:".red().bold(), e.white());
        process::exit(1);
    }
}

#[derive(Error, Debug)]
enum Error {
    #[error("IO: {0}")]
    Read(String),
    #[error("IO: {0}")]
    Write(String),
    #[error("{0}")]
    Deserialization(String),
    #[error("{0}")]
    Serialization(String),
}

fn run(args: Args) -> Result<(), Error> {
    let config = document::load(&args.source)?;

    for format in FileFormat::ALL {
        let path = emit::write(&config, format, &args.out_dir)?;
        if !args.quiet {
            eprintln!(
                "{} {:<30}  {}  {:<30}",
                "Wrote".green().bold(),
                args.source.display().dimmed(),
                "->".white().bold(),
                path.display().dimmed()
            );
        }
    }

    if let Some(subsystems) = document::subsystems(&config) {
        println!("subsystems:{}", document::Printed(subsystems));
    }
    Ok(())
}
