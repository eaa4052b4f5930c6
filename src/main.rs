//! # cos2-table
//!
//! Write the table of y = cos²(x) to a text file, one "x y" sample per
//! line.
//!
//! ```bash
//! # 1 000 001 samples of [0, 1000] with step 0.001 into output.txt
//! cos2-table
//!
//! # Another range, step or file
//! cos2-table --lower -1 --upper 1 --step 0.5 -o small.txt
//!
//! # Left Riemann sum of a table file (or of stdin)
//! cos2-table area output.txt
//! cos2-table area - < output.txt
//! ```

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cos2_table::{area, cos2, read, read_file, Table, LOWER, OUTPUT_FILE, STEP,
                 UPPER};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tabulate cos²(x) on a uniform grid.
#[derive(Parser, Debug)]
#[command(name = "cos2-table", version)]
struct Args {
    /// Lower bound of the table
    #[arg(long, default_value_t = LOWER, allow_negative_numbers = true)]
    lower: f64,

    /// Upper bound of the table
    #[arg(long, default_value_t = UPPER, allow_negative_numbers = true)]
    upper: f64,

    /// Distance between consecutive x values
    #[arg(long, default_value_t = STEP)]
    step: f64,

    /// File to write (created or truncated)
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: PathBuf,

    /// Increase logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the left Riemann sum of a table file
    Area {
        /// Table file with one "x y" pair per line ("-" for stdin)
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Some(Command::Area { file }) => {
            let samples = if file.as_os_str() == "-" {
                read(io::stdin().lock()).context("cannot read table from stdin")?
            } else {
                read_file(&file)?
            };
            info!(n = samples.len(), "computing area");
            println!("{}", area(&samples));
        }
        None => {
            let mut table = Table::new(cos2, args.lower, args.upper, args.step)
                .context("invalid table parameters")?;
            let n = table.write_file(&args.output)?;
            info!(n, output = %args.output.display(), "done");
        }
    }
    Ok(())
}
