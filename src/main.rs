use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use log::{debug, info};
use stagecalc::{get_result, util::format::DisplayOptions};

/// stagecalc evaluates arithmetic expressions made of numbers and the four
/// basic operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate the file line by line.
    #[arg(short, long)]
    file: bool,

    /// Round results to this many decimal places (at most 65535).
    #[arg(short, long, value_parser = clap::value_parser!(u16))]
    precision: Option<u16>,

    /// Text printed before every result.
    #[arg(long, default_value = stagecalc::util::format::DEFAULT_PREFIX)]
    prefix: String,

    /// An expression, or a file path with `--file`. Without it an interactive
    /// prompt reads expressions from standard input.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = DisplayOptions { precision: args.precision,
                                   prefix:    args.prefix, };

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            info!("evaluating {path}");

            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                print_result(line, &options);
            }
        },
        Some(expression) => print_result(&expression, &options),
        None => {
            if let Err(e) = repl(&options) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    }
}

/// Reads expressions from standard input until end of input or `exit`.
fn repl(options: &DisplayOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("end of input");
            return Ok(());
        };

        match line.trim() {
            "" => {},
            "exit" | "quit" => return Ok(()),
            expression => print_result(expression, options),
        }
    }
}

fn print_result(expression: &str, options: &DisplayOptions) {
    match get_result(expression, options) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("{e}"),
    }
}
