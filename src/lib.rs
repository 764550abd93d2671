pub mod extract;
pub mod logging;
pub mod query;
pub mod redis;

pub use extract::{ExtractionEngine, Reply};
pub use query::{FilterExpr, TagFilter, escape_tag, field_value_regex};
pub use redis::{SearchCommand, SearchCommandError, run_search};
