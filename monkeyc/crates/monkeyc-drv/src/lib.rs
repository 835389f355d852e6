//! monkeyc-drv - Front-end driver.
//!
//! The driver is the entry point and orchestrator for the front-end
//! pipeline. Given a source file it runs lexing and parsing and prints
//! either the token stream or the program's canonical form; without a
//! file it hands control to the interactive [`repl`].
//!
//! ```text
//! Source file (.monkey)
//!        │
//!        ▼
//!   [Lexer] ──▶ Token stream        (--emit tokens stops here)
//!        │
//!        ▼
//!   [Parser] ──▶ AST ──▶ canonical string
//! ```
//!
//! Diagnostics accumulated during parsing are printed to stderr after
//! the parse finishes; a non-empty list makes the run fail.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use monkeyc_lex::Lexer;
use monkeyc_par::Parser;
use monkeyc_util::Level;

pub mod repl;

/// What the driver prints for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitType {
    /// The token stream, one debug-formatted token per line
    Tokens,
    /// The parsed program's canonical string
    #[default]
    Ast,
}

/// Driver configuration for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file to process; `None` starts the REPL
    pub input: Option<PathBuf>,

    /// What to print for a source file
    pub emit: EmitType,
}

/// Errors surfaced by a driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading the source file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parser reported one or more syntax errors.
    #[error("parsing failed with {errors} error(s)")]
    ParseFailed { errors: usize },

    /// The interactive session could not read or write its streams.
    #[error("repl io error: {0}")]
    Repl(#[from] io::Error),
}

/// One driver invocation.
///
/// A session holds the configuration and runs the pipeline against it.
pub struct Session {
    config: Config,
}

impl Session {
    /// Create a new session.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the session: process the configured file, or start the REPL.
    pub fn run(&self) -> Result<(), DriverError> {
        match &self.config.input {
            Some(path) => self.run_file(path.clone()),
            None => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                repl::start(stdin.lock(), stdout.lock())?;
                Ok(())
            }
        }
    }

    fn run_file(&self, path: PathBuf) -> Result<(), DriverError> {
        let source = fs::read_to_string(&path).map_err(|source| DriverError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read source file");

        match self.config.emit {
            EmitType::Tokens => {
                let mut count = 0usize;
                for token in Lexer::new(&source) {
                    println!("{:?}", token);
                    count += 1;
                }
                debug!(tokens = count, "emitted token stream");
                Ok(())
            }
            EmitType::Ast => {
                let mut parser = Parser::new(Lexer::new(&source));
                let program = parser.parse_program();

                if parser.handler().has_errors() {
                    for diagnostic in parser.handler().diagnostics() {
                        if diagnostic.level == Level::Error {
                            eprintln!("{}", diagnostic);
                        }
                    }
                    return Err(DriverError::ParseFailed {
                        errors: parser.handler().error_count(),
                    });
                }

                debug!(statements = program.statements.len(), "parsed program");
                println!("{}", program);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_starts_repl_mode() {
        let config = Config::default();
        assert!(config.input.is_none());
        assert_eq!(config.emit, EmitType::Ast);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let session = Session::new(Config {
            input: Some(PathBuf::from("/nonexistent/input.monkey")),
            emit: EmitType::Ast,
        });

        match session.run() {
            Err(DriverError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/input.monkey"));
            }
            other => panic!("expected io error, got {:?}", other.err()),
        }
    }
}
