use anyhow::Result;
use arraygen::config::{OutputFormat, Settings};
use arraygen::discover::{discover, source_files};
use arraygen::emit::{build_artifacts, write_artifacts};
use clap::Parser as ClapParser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generates `ArrayN<T>` inline array types for every size used in the inputs.
#[derive(ClapParser, Debug)]
struct Args {
    /// Rust source files or directories to scan.
    inputs: Vec<PathBuf>,

    #[arg(short, long)]
    out_dir: PathBuf,

    /// Extra capacity to generate, whether or not any input uses it.
    #[arg(short, long = "size", allow_negative_numbers = true)]
    sizes: Vec<i64>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    #[arg(long)]
    type_prefix: Option<String>,

    #[arg(long)]
    interface_path: Option<String>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let Args {
        inputs,
        out_dir,
        sizes,
        config,
        format,
        type_prefix,
        interface_path,
        verbose,
    } = Args::parse();

    init_logging(verbose);

    let mut settings = match &config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    settings.apply_overrides(format, type_prefix, interface_path);

    info!("generating inline array types");

    let files = source_files(&inputs)?;

    let mut requested = sizes;
    requested.extend(discover(&files, &settings.type_prefix)?);

    if requested.is_empty() {
        info!("no array types found, generating base sizes only");
    }

    let artifacts = build_artifacts(&requested, &settings)?;

    for path in write_artifacts(&out_dir, &artifacts)? {
        println!("{}", path.display());
    }

    Ok(())
}
