use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::Parser;
use thistle_core::analyze;

/// Command line arguments for the Thistle front end.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to analyze; reads stdin when omitted.
    #[arg(short, long)]
    input: Option<String>,

    /// Stop after checking; do not print the program tree.
    #[arg(long, help = "Only report diagnostics, without the tree dump")]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)
}

fn execute(cli: Cli) -> Result<()> {
    let source = match cli.input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read input file {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let analysis = analyze(&source);
    if !analysis.is_valid() {
        for rendered in analysis.render_diagnostics(&source) {
            eprintln!("{rendered}");
        }
        bail!("analysis failed");
    }

    if !cli.check {
        print!("{}", analysis.tree.dump());
    }

    Ok(())
}
