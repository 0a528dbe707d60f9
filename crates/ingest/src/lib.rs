//! Loads `ContentItem` records from exported CSV or JSON files.
//!
//! Missing text fields become empty strings and missing or blank numeric
//! fields become 0; anything present must parse.

pub mod error;
pub mod loader;

pub use error::IngestError;
pub use loader::{load_csv, load_json, load_path, parse_json, read_csv};
