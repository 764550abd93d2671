pub mod command;
pub mod runner;
pub use command::SearchCommand;
pub use runner::{SearchCommandError, run_search};
