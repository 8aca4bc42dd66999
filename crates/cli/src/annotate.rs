//! GitHub Actions workflow command output.
//!
//! Lines of the form `::error::<message>` become error annotations in the
//! workflow log.

/// Format a message as a workflow error command.
pub fn format_error(message: &str) -> String {
    format!("::error::{message}")
}

/// Emit an error annotation on stderr.
pub fn error(message: &str) {
    eprintln!("{}", format_error(message));
}

#[cfg(test)]
#[path = "annotate_tests.rs"]
mod tests;
