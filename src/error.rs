//! Error formatting for the command-line boundary.

use anyhow::Error;

/// Format an error and its source chain into a single line.
///
/// Messages are joined with " → ", outermost context first.
///
/// # Example
///
/// ```
/// use github_languages::error::format_error_chain;
///
/// let err = anyhow::anyhow!("connection refused")
///     .context("Failed to read GitHub token from Vault");
/// assert_eq!(
///     format_error_chain(&err),
///     "Failed to read GitHub token from Vault → connection refused"
/// );
/// ```
pub fn format_error_chain(error: &Error) -> String {
    error
        .chain()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

