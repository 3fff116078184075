//! Environment-driven configuration
//!
//! Two independent configuration blocks: the content API (always
//! available, compiled defaults) and the mail relay (optional; the
//! contact form degrades to a failure acknowledgement without it).

use std::env;

/// Default content API endpoint. Override with `FOTOFOLIO_API_URL`.
const DEFAULT_API_URL: &str = "https://fotofolioapi-production.up.railway.app";

/// Default API key the demo backend accepts. Override with
/// `FOTOFOLIO_API_KEY`.
const DEFAULT_API_KEY: &str = "my-super-secret-key-test";

/// Content API endpoint and key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the content API, without a trailing path
    pub base_url: String,
    /// Static key sent in the `X-API-KEY` header
    pub api_key: String,
}

impl ApiConfig {
    /// Build from explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read `FOTOFOLIO_API_URL` / `FOTOFOLIO_API_KEY`, falling back to the
    /// compiled defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("FOTOFOLIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: env::var("FOTOFOLIO_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_API_KEY)
    }
}

/// Mail relay parameters for contact-form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Relay service id
    pub service_id: String,
    /// Relay template id
    pub template_id: String,
    /// Relay public key (sent as the user id)
    pub public_key: String,
}

impl MailConfig {
    /// Read `FOTOFOLIO_MAIL_SERVICE_ID` / `FOTOFOLIO_MAIL_TEMPLATE_ID` /
    /// `FOTOFOLIO_MAIL_PUBLIC_KEY`.
    ///
    /// Returns `None` when any of the three is missing or empty; the
    /// mailer then reports submissions as failed instead of panicking.
    pub fn from_env() -> Option<Self> {
        let service_id = non_empty_var("FOTOFOLIO_MAIL_SERVICE_ID")?;
        let template_id = non_empty_var("FOTOFOLIO_MAIL_TEMPLATE_ID")?;
        let public_key = non_empty_var("FOTOFOLIO_MAIL_PUBLIC_KEY")?;
        Some(Self {
            service_id,
            template_id,
            public_key,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
