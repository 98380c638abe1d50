//! Gateway error types.

use thiserror::Error;

/// Errors that can occur while talking to the remote repository API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// GitHub API error.
    #[error("GitHub API error: {}", describe_octocrab_error(.0))]
    GitHub(#[from] octocrab::Error),

    /// The requested file does not exist at the revision.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// The file exists but its content could not be decoded as text.
    #[error("Failed to decode '{path}': {message}")]
    Decode { path: String, message: String },

    /// Transport failure reported by a non-GitHub gateway.
    #[error("Request failed: {message}")]
    Request { message: String },
}

/// Renders an octocrab error with the detail its own `Display` leaves out.
///
/// API errors carry the HTTP status and GitHub's message. Anything else is
/// rendered with its whole source chain.
fn describe_octocrab_error(error: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = error {
        return format!("{}: {}", source.status_code, source.message);
    }

    let mut message = error.to_string();
    let mut cause = std::error::Error::source(error);
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
