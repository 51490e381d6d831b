//! segtree-layout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use segtree_layout::{OutputFormat, RenderConfig, render_source};

/// Draw a segment tree described in a small text format.
#[derive(Parser, Debug)]
#[command(
    name = "segtree-layout",
    version = env!("SEGTREE_LAYOUT_VERSION"),
    about = "Lay out a segment tree and draw it as text or SVG"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Output format: text or svg
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: String,

    /// Node padding (spaces inside border)
    #[arg(short = 'p', long = "padding", default_value = "1")]
    padding: usize,

    /// Minimum columns between boxes on the same level
    #[arg(short = 'g', long = "gap", default_value = "2")]
    gap: usize,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let Some(format) = OutputFormat::from_name(&cli.format) else {
        eprintln!("error: unknown format '{}'; use text or svg", cli.format);
        process::exit(1);
    };

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = RenderConfig {
        unicode: !cli.use_ascii,
        padding: cli.padding,
        gap: cli.gap,
        format,
    };
    let rendered = match render_source(&text, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
