//! Value types shared by the pricing and analytics engines.
//!
//! This is the bottom layer of the workspace: it knows nothing about
//! configuration, files or rendering.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{GuestType, Metric, RankDirection};
pub use error::CoreError;
pub use structs::{ContentItem, Event, Property};
