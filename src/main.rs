use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use log::LevelFilter;
use plang::{
    interpreter::config::{Config, Dialect, Limits, MAX_DEPTH, MAX_VARIABLES},
    shell::run_session,
};
use simple_logger::SimpleLogger;

/// plang runs one tiny integer program per input line and prints its
/// results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which language variant to interpret.
    #[arg(short, long, value_enum, default_value_t = Dialect::Extended)]
    dialect: Dialect,

    /// Reads program lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of variables per line.
    #[arg(long, default_value_t = MAX_VARIABLES)]
    max_variables: usize,

    /// Fails a line once its `while` loops have iterated this many times.
    /// Loops are unbounded by default.
    #[arg(long)]
    max_loop_iterations: Option<u64>,

    /// Deepest nesting of parentheses and braces per line.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Does not print the `>> ` prompt before reading a line.
    #[arg(long)]
    no_prompt: bool,

    /// Logs more detail to stderr; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    let config = Config { dialect: args.dialect,
                          limits:  Limits { max_variables: args.max_variables,
                                            max_loop_iterations: args.max_loop_iterations,
                                            max_depth: args.max_depth,
                                            ..Limits::default() }, };

    let mut stdout = io::stdout().lock();
    let result = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                 path.display());
                                       std::process::exit(1);
                                   });
        run_session(BufReader::new(file), &mut stdout, &config, false)
    } else {
        run_session(io::stdin().lock(), &mut stdout, &config, !args.no_prompt)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
