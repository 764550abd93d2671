pub mod engine;
pub mod reply;
pub use engine::ExtractionEngine;
pub use reply::{RecordPair, Reply};
