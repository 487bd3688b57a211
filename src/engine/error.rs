use crate::input::LoadError;
use std::io;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
///
/// The tokenizer and renderers never fail; everything here comes from
/// argument handling, loading sources or talking to the terminal.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
