pub mod error;
pub mod fields;

// Backend records consumed by the client
pub mod case;
pub mod config;
pub mod judge;
pub mod profile;

pub use case::*;
pub use config::*;
pub use error::*;
pub use fields::{display_value, field_rows, humanize_key};
pub use judge::*;
pub use profile::*;
