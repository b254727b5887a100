//! Command-line interpreter for PandoraDownloader.
//!
//! Switches are looked up in a static [registry](registry::list_all_entries)
//! and their arguments parsed into a nested `service -> config -> value` map.

pub mod error;
pub mod interpret;
pub mod normalize;
pub mod registry;

pub use error::{DuplicateSwitchError, InterpretError};
pub use interpret::{
    Interpreter, ParsedResult, Sink, TracingSink, Value, interpret, interpret_or_none,
};
pub use registry::{Arity, Config, ConfigEntry, Service, SwitchTable};
