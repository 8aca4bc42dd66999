pub mod annotate;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod runner;
pub mod shell;
pub mod version;

pub use cli::Cli;
pub use error::{Error, Result};
