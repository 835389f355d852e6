//! monkeyc CLI - entry point for the Monkey front end.
//!
//! Parses arguments, sets up logging, and hands off to the driver
//! session. With a file argument the pipeline runs once and exits; with
//! no argument the interactive prompt starts.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monkeyc_drv::{Config, EmitType, Session};

/// monkeyc - lexer and parser for the Monkey language
#[derive(Parser, Debug)]
#[command(name = "monkeyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Front end for the Monkey language", long_about = None)]
struct Cli {
    /// Source file to process (starts the REPL when omitted)
    file: Option<PathBuf>,

    /// What to print for a source file
    #[arg(long, value_enum, default_value = "ast")]
    emit: Emit,

    /// Enable verbose output
    #[arg(short, long, global = true, env = "MONKEYC_VERBOSE")]
    verbose: bool,
}

/// CLI surface of [`EmitType`].
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Emit {
    /// Print the token stream
    Tokens,
    /// Print the parsed program's canonical form
    Ast,
}

impl From<Emit> for EmitType {
    fn from(emit: Emit) -> Self {
        match emit {
            Emit::Tokens => EmitType::Tokens,
            Emit::Ast => EmitType::Ast,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let config = Config {
        input: cli.file,
        emit: cli.emit.into(),
    };

    Session::new(config).run()?;

    Ok(())
}
