pub mod field;
pub mod filter;
pub use field::field_value_regex;
pub use filter::{FilterExpr, TagFilter, escape_tag};
