/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::io::Write;

use clap::Parser;

use pandoc_admonition::errors::Result;
use pandoc_admonition::filters::{Format, transform};
use pandoc_admonition::readers;
use pandoc_admonition::styles::StyleRegistry;
use pandoc_admonition::writers;

#[derive(Parser, Debug)]
#[command(name = "pandoc-admonition")]
#[command(about = "Pandoc JSON filter rendering admonition boxes for HTML and LaTeX output")]
struct Args {
    /// Output format pandoc is targeting; pandoc passes this itself when
    /// the filter runs under `--filter`.
    #[arg(default_value = "")]
    format: String,
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut stdin = std::io::stdin().lock();
    let doc = readers::json::read(&mut stdin)?;

    let registry = StyleRegistry::builtin();
    let doc = transform(doc, Format::from_name(&args.format), &registry)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writers::json::write(doc, &mut out)?;
    out.flush()?;
    Ok(())
}
