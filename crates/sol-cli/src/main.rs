//! stlfix - rewrite the first triangle's normal of a binary STL file.
//!
//! Reads a binary STL, replaces the first triangle's normal with the one
//! derived from its vertex winding, and writes the result. Fails fast on
//! the first parse or write error with a non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use sol_stl::{fix_first_normal, read_stl_file, write_stl_file};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stlfix", about = "Fix the first triangle's normal of a binary STL file")]
struct Args {
    /// Input STL filepath
    #[arg(short, long)]
    input: PathBuf,

    /// Output STL filepath
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut model = read_stl_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(
        triangles = model.triangle_count(),
        input = %args.input.display(),
        "parsed binary STL"
    );

    fix_first_normal(&mut model).context("failed to correct the first triangle's normal")?;

    write_stl_file(&model, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), "wrote corrected STL");

    Ok(())
}
