use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::InterpretError;
use crate::normalize;
use crate::registry::{self, Arity, Config, ConfigEntry, Service};

/// A parsed switch argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),
    StringList(Vec<String>),
    IntList(Vec<i64>),
    Path(PathBuf),
}

pub type ParsedResult = BTreeMap<Service, BTreeMap<Config, Value>>;

/// Receives the help and diagnostic text produced while interpreting.
pub trait Sink {
    fn help(&mut self, text: &str);
    fn error(&mut self, err: &InterpretError);
}

/// Default sink: routes everything through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn help(&mut self, text: &str) {
        tracing::info!("\n{text}");
    }

    fn error(&mut self, err: &InterpretError) {
        tracing::error!("{err}");
    }
}

/// Turns command-line tokens into per-service configuration.
#[derive(Debug, Default, Clone)]
pub struct Interpreter {
    base_dir: Option<PathBuf>,
}

impl Interpreter {
    /// Resolve relative paths against the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `base_dir` instead of the working directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Interpret `tokens`, skipping `tokens[0]` (the program name).
    ///
    /// On any error, help request included, the diagnostic and the usage text
    /// go to `sink` and nothing parsed so far is returned.
    pub fn interpret<S: AsRef<str>>(
        &self,
        tokens: &[S],
        sink: &mut impl Sink,
    ) -> Result<ParsedResult, InterpretError> {
        let result = self.scan(tokens);

        if let Err(ref err) = result {
            if !err.is_help() {
                sink.error(err);
            }
            sink.help(&registry::render_help());
        }

        result
    }

    fn scan<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedResult, InterpretError> {
        let table = registry::build_switch_table()?;
        let mut parsed = ParsedResult::new();
        let mut cursor = 1;

        while let Some(token) = tokens.get(cursor) {
            let token = token.as_ref();
            let entry = *table
                .get(token)
                .ok_or_else(|| InterpretError::UnknownSwitch {
                    token: token.to_string(),
                })?;

            let value = match entry.arity {
                Arity::Help => return Err(InterpretError::HelpRequested),
                Arity::Bool => {
                    cursor += 1;
                    Value::Bool(true)
                }
                arity => {
                    let raw = tokens
                        .get(cursor + 1)
                        .map(|s| s.as_ref())
                        .ok_or_else(|| InterpretError::MissingArgument {
                            token: token.to_string(),
                            expected: arity.expected(),
                        })?;
                    cursor += 2;
                    self.parse_value(token, arity, raw)?
                }
            };

            tracing::debug!(switch = token, config = ?entry.config, ?value, "parsed switch");
            record(&mut parsed, entry, value);
        }

        Ok(parsed)
    }

    fn parse_value(&self, token: &str, arity: Arity, raw: &str) -> Result<Value, InterpretError> {
        let invalid = || InterpretError::InvalidArgument {
            token: token.to_string(),
            value: raw.to_string(),
        };

        let value = match arity {
            Arity::Int => Value::Int(raw.trim().parse().map_err(|_| invalid())?),
            Arity::String => Value::String(raw.to_string()),
            Arity::StringList => Value::StringList(parse_string_list(raw)),
            Arity::IntList => Value::IntList(parse_int_list(raw).ok_or_else(invalid)?),
            Arity::FilePath => Value::Path(normalize::absolute_path(&self.base_dir()?, raw)),
            Arity::DirPath => Value::Path(normalize::absolute_dir(&self.base_dir()?, raw)),
            Arity::Help | Arity::Bool => unreachable!("{arity:?} takes no argument"),
        };

        Ok(value)
    }

    fn base_dir(&self) -> Result<PathBuf, InterpretError> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(InterpretError::CurrentDir),
        }
    }
}

/// Last write wins when one configuration is given more than once.
fn record(parsed: &mut ParsedResult, entry: &ConfigEntry, value: Value) {
    parsed
        .entry(entry.service)
        .or_default()
        .insert(entry.config, value);
}

/// Split on commas, trim and lower-case each piece.
pub fn parse_string_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .map(str::to_lowercase)
        .collect()
}

/// Split on commas and parse each trimmed piece as a base-10 integer.
/// `None` if any piece, an empty one included, is not a number.
pub fn parse_int_list(raw: &str) -> Option<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .map(|s| s.parse().ok())
        .collect()
}

/// Interpret `tokens` with the process working directory and the tracing sink.
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> Result<ParsedResult, InterpretError> {
    Interpreter::new().interpret(tokens, &mut TracingSink)
}

/// Like [`interpret`], collapsing help and every error into `None`.
pub fn interpret_or_none<S: AsRef<str>>(tokens: &[S]) -> Option<ParsedResult> {
    interpret(tokens).ok()
}
