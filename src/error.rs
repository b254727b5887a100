use std::io;

use thiserror::Error;

use crate::registry::Config;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("switch {switch} is declared by both {first:?} and {second:?}")]
pub struct DuplicateSwitchError {
    pub switch: &'static str,
    pub first: Config,
    pub second: Config,
}

#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("Unknown switch: {token}")]
    UnknownSwitch { token: String },

    #[error("Switch {token} requires {expected}")]
    MissingArgument {
        token: String,
        expected: &'static str,
    },

    #[error("Invalid argument for {token}: {value:?}")]
    InvalidArgument { token: String, value: String },

    /// `-h`/`--help` was given. Terminal, but not a failure.
    #[error("Help requested")]
    HelpRequested,

    #[error(transparent)]
    DuplicateSwitch(#[from] DuplicateSwitchError),

    #[error("Cannot resolve the current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl InterpretError {
    pub fn is_help(&self) -> bool {
        matches!(self, Self::HelpRequested)
    }
}
