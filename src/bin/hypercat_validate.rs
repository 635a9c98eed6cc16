//! Validate a HyperCat catalogue document and optionally re-emit it.
//!
//! Usage:
//!   hypercat-validate --file catalogue.json
//!   hypercat-validate --strict --emit --pretty < catalogue.json
//!   hypercat-validate --schema custom.schema.json --file catalogue.json

use anyhow::{Context, Result};
use clap::Parser;
use hypercat::{Catalogue, CatalogueSchema, CodecOptions, DescriptionPolicy};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hypercat-validate")]
#[command(about = "Validate a HyperCat catalogue and optionally re-emit it")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Optional JSON Schema to check the document against instead of the bundled one.
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Reject entities carrying more than one description relation.
    #[arg(long)]
    strict: bool,
    /// Print the re-encoded catalogue instead of a summary.
    #[arg(long)]
    emit: bool,
    /// Pretty-print the emitted catalogue.
    #[arg(long, requires = "emit")]
    pretty: bool,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input catalogue")?;
    }
    Ok(buf)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let input = read_input(cli.file.as_deref())?;

    let value: Value = serde_json::from_str(&input).context("parsing input JSON")?;
    let schema = match &cli.schema {
        Some(path) => CatalogueSchema::load(path)?,
        None => CatalogueSchema::bundled().context("compiling bundled schema")?,
    };
    schema.validate(&value)?;

    let mut options = CodecOptions::from_env();
    if cli.strict {
        options.description_policy = DescriptionPolicy::Reject;
    }
    // Shape was already checked against the selected schema.
    options.validate_schema = false;
    let catalogue = Catalogue::parse_with(&input, &options).context("decoding catalogue")?;

    if cli.emit {
        let text = if cli.pretty {
            catalogue.to_json_pretty()?
        } else {
            catalogue.to_json()?
        };
        println!("{text}");
    } else {
        println!(
            "ok: {} item(s), {} relation(s), description {:?}",
            catalogue.items().len(),
            catalogue.relations().len(),
            catalogue.description()
        );
    }
    Ok(())
}
