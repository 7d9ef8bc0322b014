//! `enigma` — decode a digit message with a JSON dictionary.
//!
//! Usage:
//!   enigma [--verbose | --quiet] <dictionary.json>
//!
//! The dictionary file maps digit-string keys to one-character strings. The
//! message is read from stdin, e.g. `1,2,3,7` or `1237`.

use enigma::cli::{parse_args, run, CliError, Verbosity};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: Verbosity) {
    // --quiet wins over RUST_LOG; --verbose honours RUST_LOG when set.
    let filter = match verbosity {
        Verbosity::Quiet => EnvFilter::new("off"),
        Verbosity::Normal => EnvFilter::new("warn"),
        Verbosity::Verbose => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    init_tracing(args.verbosity);

    let dictionary = match std::fs::read_to_string(&args.dictionary) {
        Ok(text) => text,
        Err(source) => {
            eprintln!(
                "{}",
                CliError::Io {
                    path: args.dictionary.clone(),
                    source,
                }
            );
            std::process::exit(1);
        }
    };

    let mut message = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut message) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&dictionary, &message) {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{text}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
