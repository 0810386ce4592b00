//! Library crate root re-exporting the property table, string predicates, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod props;

pub use lib::errors::{ConfigError, PropertyError};
pub use props::{PropertyTable, WellKnownKey};
