use clap::{ArgAction, Parser};
use std::io::{self, Write};

use locclean_cli::{CleanOptions, CleanOutcome, run_clean_command};

/// Strip keys, bracket tags and stray whitespace from a game localization file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a localization file (.int, .deu, .fra, ...)
    #[arg(short, long)]
    file: String,

    /// Print cleaned text to the terminal rather than write it to a file
    #[arg(short, long)]
    print: bool,

    /// Read and write with this encoding instead of detecting it (e.g. utf-8, shift_jis)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = CleanOptions {
        file: args.file,
        print: args.print,
        encoding: args.encoding,
    };

    match run_clean_command(&options) {
        Ok(CleanOutcome::Written { path, .. }) => {
            if let Err(e) = writeln!(io::stdout(), "Cleaned and written to {}", path.display()) {
                eprintln!("Error: cannot write to stdout: {}", e);
                std::process::exit(1);
            }
        }
        Ok(CleanOutcome::Printed { .. }) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
