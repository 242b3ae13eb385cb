use std::fs;

use clap::Parser;
use rpnote::{
    config::{Config, parse_variable_setting},
    engine::core::OperandStyle,
    get_result,
};

/// rpnote is a reverse Polish notation calculator that also tells you, in
/// infix form, what you have entered.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpnote to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the infix description of the program along with the result.
    #[arg(short, long)]
    describe: bool,

    /// Writes operands in full in the description instead of truncating
    /// them to whole numbers.
    #[arg(short, long)]
    exact: bool,

    /// Logs every push and evaluation. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Binds a variable before the script runs, for example `--set M=7`.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_variable_setting)]
    variables: Vec<(String, f64)>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = Config { describe:      args.describe,
                          operand_style: if args.exact {
                              OperandStyle::Exact
                          } else {
                              OperandStyle::Truncated
                          },
                          variables:     args.variables, };

    if let Err(e) = get_result(&script, &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
