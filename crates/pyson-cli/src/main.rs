//! `pyson` CLI — convert Python literal notation to JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a Python literal to pretty-printed JSON (stdin → stdout)
//! echo "{'name': 'Alice', 'tags': ('a', 'b')}" | pyson convert
//!
//! # Convert from file to file
//! pyson convert -i dump.py -o dump.json
//!
//! # Minified output
//! pyson convert --compact -i dump.py
//!
//! # Validate only: prints OK, or the syntax error on stderr (exit 1)
//! pyson check -i dump.py
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "pyson",
    version,
    about = "Convert Python literals (dict/list/tuple/set) to JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Python literal input to JSON
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Parse the input and report success or the syntax error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Convert {
            input,
            output,
            compact,
        } => {
            let source = read_input(input.as_deref())?;
            let json = if compact {
                pyson_core::to_json(&source)
            } else {
                pyson_core::to_json_pretty(&source)
            }
            .context("Failed to convert Python literal to JSON")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input } => {
            let source = read_input(input.as_deref())?;
            match pyson_core::parse(&source) {
                Ok(_) => println!("OK"),
                Err(err) => {
                    eprintln!("{err}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
