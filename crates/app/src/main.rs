use std::fmt;
use std::io;
use std::path::PathBuf;

use flashcards_core::Deck;
use services::{Console, import_from_path, repl};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    import_from: PathBuf,
    export_to: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [-import_from <path>] [-export_to <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  -import_from IMPORT   read at startup; a missing file is reported, not fatal");
    eprintln!("  -export_to EXPORT     written when the exit command runs");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASHCARDS_IMPORT_FROM, FLASHCARDS_EXPORT_TO, FLASHCARDS_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut import_from =
            std::env::var("FLASHCARDS_IMPORT_FROM").unwrap_or_else(|_| "IMPORT".into());
        let mut export_to =
            std::env::var("FLASHCARDS_EXPORT_TO").unwrap_or_else(|_| "EXPORT".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-import_from" | "--import-from" => {
                    import_from = require_value(args, "-import_from")?;
                }
                "-export_to" | "--export-to" => {
                    export_to = require_value(args, "-export_to")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            import_from: import_from.into(),
            export_to: export_to.into(),
        })
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FLASHCARDS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Diagnostics go to stderr so the prompt stream on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Session state lives in the binary glue and is passed into the loop,
    // so core and services stay free of process-wide singletons.
    let mut deck = Deck::new();
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    import_from_path(&mut deck, &mut console, &parsed.import_from)?;
    repl::run(&mut deck, &mut console, &parsed.export_to)?;
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
