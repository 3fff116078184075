//! Contact-form submission through a transactional mail relay
//!
//! EmailJS-compatible wire shape: one POST carrying the service id,
//! template id, public key and the form fields as template parameters.
//! Success or failure surfaces to the user as an acknowledgement line
//! only; nothing here is fatal.

use serde::Serialize;

use crate::config::MailConfig;
use crate::error::{PortfolioError, PortfolioResult};

/// Relay send endpoint.
const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// One contact-form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// Sender's full name
    pub name: String,
    /// Sender's reply address
    pub email: String,
    /// Message body
    pub message: String,
}

/// Wire format the relay expects.
#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Client for the mail relay
///
/// Holds the three relay parameters from configuration. Missing
/// configuration disables sending rather than failing construction, so
/// the contact page always renders.
#[derive(Debug, Clone)]
pub struct MailRelay {
    client: reqwest::Client,
    config: Option<MailConfig>,
}

impl MailRelay {
    /// Build a relay client; `config: None` produces a disabled relay.
    pub fn new(config: Option<MailConfig>) -> PortfolioResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client, config })
    }

    /// Whether submissions can be sent at all.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Submit one message.
    pub async fn send(&self, message: &ContactMessage) -> PortfolioResult<()> {
        let Some(config) = &self.config else {
            return Err(PortfolioError::MailerDisabled);
        };

        let request = RelayRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        };

        tracing::debug!(service = %config.service_id, "contact submission");
        let response = self.client.post(RELAY_ENDPOINT).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Api {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
