// src/core/error.rs

use thiserror::Error;

/// Reasons a submission is rejected before any classification runs.
///
/// The `Display` text is what the user sees in the notification.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Please enter a URL to scan")]
    EmptyInput,

    #[error("Please enter a valid URL")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
