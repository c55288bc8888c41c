//! vd2png CLI
//!
//! Usage:
//!   vd2png [OPTIONS] [INPUT] [OUTPUT]
//!
//! Options:
//!   -i, --input <FILE>   Input android vector drawable XML file
//!   -o, --output <FILE>  Output PNG file
//!   -h, --help           Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;

use vd2png::{convert, ConvertConfig, ConvertError};

/// No input filename could be resolved from flags or positionals
const EXIT_NO_INPUT: i32 = 11;
/// The input file exists in the arguments but could not be read
const EXIT_UNREADABLE_INPUT: i32 = 22;

#[derive(Parser)]
#[command(name = "vd2png")]
#[command(about = "Render Android vector drawable XML files to PNG")]
struct Cli {
    /// Input vector drawable XML file
    #[arg(value_name = "INPUT")]
    input_arg: Option<PathBuf>,

    /// Output PNG file (defaults to the input name with a .png extension)
    #[arg(value_name = "OUTPUT")]
    output_arg: Option<PathBuf>,

    /// Input file (takes precedence over the positional argument)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (takes precedence over the positional argument)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }

    let Some(input) = cli.input.or(cli.input_arg) else {
        eprintln!("Missing input file name (android xml vector drawable).");
        process::exit(EXIT_NO_INPUT);
    };

    let output = cli
        .output
        .or(cli.output_arg)
        .unwrap_or_else(|| input.with_extension("png"));

    let config = ConvertConfig::new(input, output);
    match convert(&config) {
        Ok(()) => {}
        Err(e @ ConvertError::ReadInput { .. }) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_UNREADABLE_INPUT);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

static LOGGER: SimpleLogger = SimpleLogger;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
