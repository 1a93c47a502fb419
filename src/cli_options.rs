/*
cli_options.rs

Copyright 2025 The Stargrid contributors

This file is part of Stargrid.

Stargrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Stargrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Stargrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options and drive the generator.
//!
//! The command line replaces a graphical front end: it owns the step loop, prints the grid
//! between steps when asked to, and reports the result.
//!
//! # Examples
//!
//! Generate a 5x5 layout with one star per row and column:
//!
//! ```text
//! $ stargrid -r 5 -c 5 -s 1 --seed 42
//! *xxxx
//! xxx*x
//! .*xxx
//! xxxx*
//! ..*xx
//! step 6  column 5/5  backtracks 0  status done
//! ```
//!
//! Step through the generation, pressing Enter between steps:
//!
//! ```text
//! $ stargrid -r 8 -c 8 -s 1 --seed 1 --interactive
//! ```
//!
//! Generate 100 layouts with consecutive seeds and print some statistics:
//!
//! ```text
//! $ stargrid -r 10 -c 10 -s 2 --seed 1 -n 100 --summary
//! ```

use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug, info};
use rand::Rng;
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use stargrid::draw;
use stargrid::generator::column_generator::{ColumnGenerator, GenerationStatus};
use stargrid::generator::parameters::Parameters;

use crate::config::{
    COPYRIGHT_NOTICE, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_STARS_PER_LINE, MAX_RANDOM_SEED,
};

/// Exit code for a layout that could not be generated.
const EXIT_FAILED: u8 = 2;

/// Exit code for invalid parameters or I/O errors.
const EXIT_ERROR: u8 = 1;

/// Output format for the generated layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
enum OutputFormat {
    /// Character map
    #[default]
    Text,

    /// JSON snapshot of the generator
    Json,
}

/// Generate star-placement puzzle layouts.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of rows [default: 15]
    #[arg(short, long)]
    rows: Option<usize>,

    /// Number of columns [default: 15]
    #[arg(short, long)]
    cols: Option<usize>,

    /// Number of stars in every row and every column [default: 3]
    #[arg(short, long)]
    stars: Option<usize>,

    /// Seed of the random sequence (a random seed is used if not provided)
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// JSON file with the layout parameters. Command-line options take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the grid after every step
    #[arg(short, long, default_value_t = false)]
    trace: bool,

    /// Wait for Enter before every step
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of layouts to generate, with consecutive seeds
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print some statistics after generating the layouts
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Layout parameters read from a JSON file. Missing values fall back to the defaults.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct ParameterFile {
    rows: Option<usize>,
    cols: Option<usize>,
    stars_per_line: Option<usize>,
    seed: Option<i64>,
}

/// Read the parameter file.
fn read_parameter_file(path: &Path) -> Result<ParameterFile, Box<dyn Error>> {
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let parameters: ParameterFile = serde_json::from_reader(reader)?;
    Ok(parameters)
}

/// Merge the command-line options, the parameter file, and the defaults.
fn build_parameters(args: &Args, file: &ParameterFile) -> Parameters {
    let seed: i64 = match args.seed.or(file.seed) {
        Some(s) => s,
        None => {
            let s: i64 = rand::rng().random_range(1..MAX_RANDOM_SEED);
            info!("Using random seed {s}");
            s
        }
    };
    Parameters::new(
        args.rows.or(file.rows).unwrap_or(DEFAULT_ROWS),
        args.cols.or(file.cols).unwrap_or(DEFAULT_COLS),
        args.stars.or(file.stars_per_line).unwrap_or(DEFAULT_STARS_PER_LINE),
        seed,
    )
}

/// Wait for the user to press Enter. Return `false` at the end of the input.
fn wait_for_enter() -> io::Result<bool> {
    eprint!("Press Enter for the next step ");
    io::stderr().flush()?;
    let mut line: String = String::new();
    Ok(io::stdin().read_line(&mut line)? > 0)
}

/// Step through the generation, printing the grid after every step.
fn step_through(generator: &mut ColumnGenerator, interactive: bool) -> io::Result<()> {
    print!("{}", draw::draw_snapshot(&generator.snapshot()));
    while !generator.is_finished() {
        if interactive && !wait_for_enter()? {
            debug!("End of input: stopping");
            break;
        }
        generator.step();
        println!();
        print!("{}", draw::draw_snapshot(&generator.snapshot()));
    }
    Ok(())
}

/// Run statistics for the `--summary` option.
#[derive(Debug, Default)]
struct Summary {
    done: usize,
    failed: usize,
    steps: usize,
    backtracks: usize,
    total: f32,
    max: f32,
}

impl Summary {
    fn add(&mut self, generator: &ColumnGenerator, duration: f32) {
        match generator.status() {
            GenerationStatus::Done => self.done += 1,
            GenerationStatus::Failed => self.failed += 1,
            _ => (),
        }
        self.steps += generator.steps();
        self.backtracks += generator.backtrack_count();
        self.total += duration;
        if duration > self.max {
            self.max = duration;
        }
    }

    fn print(&self, count: usize) {
        println!(
            "
          completed = {}
             failed = {}
      average steps = {}
 average backtracks = {}
         total time = {}s
       average time = {}s
           max time = {}s",
            self.done,
            self.failed,
            self.steps as f32 / count as f32,
            self.backtracks as f32 / count as f32,
            self.total,
            self.total / count as f32,
            self.max
        );
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let file: ParameterFile = match &args.config {
        Some(path) => match read_parameter_file(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Cannot read the parameter file {}: {e}", path.display());
                return EXIT_ERROR;
            }
        },
        None => ParameterFile::default(),
    };
    let first: Parameters = build_parameters(&args, &file);
    let count: usize = args.count as usize;

    let mut summary: Summary = Summary::default();
    let mut last_status: GenerationStatus = GenerationStatus::Generating;

    for i in 0..count {
        let parameters: Parameters = Parameters {
            seed: first.seed.wrapping_add(i as i64),
            ..first
        };
        debug!("Layout {i}: {parameters:?}");

        let mut generator: ColumnGenerator = match ColumnGenerator::new(parameters) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Invalid parameters: {e}");
                return EXIT_ERROR;
            }
        };

        let start: Instant = Instant::now();
        if args.trace || args.interactive {
            if let Err(e) = step_through(&mut generator, args.interactive) {
                eprintln!("Error: {e}");
                return EXIT_ERROR;
            }
        } else {
            generator.run();
        }
        summary.add(&generator, start.elapsed().as_secs_f32());
        last_status = generator.status();

        match args.format {
            OutputFormat::Json => match serde_json::to_string(&generator.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return EXIT_ERROR;
                }
            },
            OutputFormat::Text => {
                // In trace mode the last state is already on screen
                if !(args.trace || args.interactive) {
                    if count > 1 {
                        println!("seed {}", parameters.seed);
                    }
                    print!("{}", draw::draw_snapshot(&generator.snapshot()));
                }
            }
        }
    }

    if args.summary {
        summary.print(count);
    }

    match last_status {
        GenerationStatus::Done => 0,
        _ => EXIT_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn options_take_precedence_over_the_file() {
        let args = Args::parse_from(["stargrid", "-r", "8", "--seed", "-3"]);
        let file = ParameterFile {
            rows: Some(6),
            cols: Some(8),
            stars_per_line: None,
            seed: Some(99),
        };
        assert_eq!(
            build_parameters(&args, &file),
            Parameters::new(8, 8, DEFAULT_STARS_PER_LINE, -3)
        );
    }

    #[test]
    fn defaults_and_random_seed() {
        let args = Args::parse_from(["stargrid"]);
        let p = build_parameters(&args, &ParameterFile::default());
        assert_eq!(p.rows, DEFAULT_ROWS);
        assert_eq!(p.cols, DEFAULT_COLS);
        assert_eq!(p.stars_per_line, DEFAULT_STARS_PER_LINE);
        assert!((1..MAX_RANDOM_SEED).contains(&p.seed));
        assert_eq!(args.count, 1);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(Args::try_parse_from(["stargrid", "-n", "0"]).is_err());
    }

    #[test]
    fn partial_parameter_file() {
        let file: ParameterFile = serde_json::from_str(r#"{"rows": 5, "seed": 42}"#).unwrap();
        assert_eq!(
            file,
            ParameterFile {
                rows: Some(5),
                cols: None,
                stars_per_line: None,
                seed: Some(42),
            }
        );
        assert!(serde_json::from_str::<ParameterFile>(r#"{"difficulty": 3}"#).is_err());
    }
}
