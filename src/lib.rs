pub mod bot;
pub mod config;
pub mod docs;
pub mod error;
pub mod fetch;
pub mod format;
pub mod locale;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use docs::{DocService, LookupOutcome, Page, PageKey, PageKind};
pub use results::FieldSet;
