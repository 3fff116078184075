//! Error types for the Fotofolio engine

use thiserror::Error;

/// Main error type for portfolio engine operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// HTTP transport failure (connect, TLS, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status
    #[error("API returned status {status}")]
    Api {
        /// HTTP status code of the response
        status: u16,
    },

    /// Contact submission attempted without mail relay configuration
    #[error("Mail relay is not configured")]
    MailerDisabled,
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
