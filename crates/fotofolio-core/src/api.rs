//! HTTP client for the remote content API
//!
//! The API is treated as an untrusted, loosely-typed collaborator: this
//! client authenticates with a static key header and hands back raw JSON;
//! shape coercion is the coordinator's job.

use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::Profile;

/// Header carrying the static API key.
const API_KEY_HEADER: &str = "X-API-KEY";

/// Client for the portfolio content API
#[derive(Debug, Clone)]
pub struct PortfolioApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl PortfolioApi {
    /// Build a client over the given configuration.
    pub fn new(config: ApiConfig) -> PortfolioResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch the raw gallery payload.
    ///
    /// The payload shape is loose (a bare array or a `{data: [...]}`
    /// wrapper), so this returns the JSON as-is for
    /// [`GalleryLoadCoordinator::complete_fetch`] to coerce.
    ///
    /// [`GalleryLoadCoordinator::complete_fetch`]:
    ///     crate::loader::GalleryLoadCoordinator::complete_fetch
    pub async fn fetch_gallery(&self) -> PortfolioResult<Value> {
        self.get_json("/api/RawData/getall").await
    }

    /// Fetch the photographer profile for the About page.
    ///
    /// The endpoint historically answers with a one-element array; a bare
    /// object is accepted too. Anything else yields `None`.
    pub async fn fetch_profile(&self) -> PortfolioResult<Option<Profile>> {
        let payload = self.get_json("/api/Profile/getProfile").await?;
        let profile = match payload {
            Value::Array(mut entries) => {
                if entries.is_empty() {
                    None
                } else {
                    serde_json::from_value(entries.remove(0)).ok()
                }
            }
            Value::Object(_) => serde_json::from_value(payload).ok(),
            _ => None,
        };
        Ok(profile)
    }

    /// Fetch a remote image asset and return it as an inline data URI.
    ///
    /// Used by the gallery grid to drive per-item load state: the item
    /// counts as displayable only once its bytes arrived (or failed and
    /// the placeholder took over).
    pub async fn fetch_image_data_uri(&self, url: &str) -> PortfolioResult<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Api {
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?;

        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(format!("data:image/jpeg;base64,{encoded}"))
    }

    async fn get_json(&self, path: &str) -> PortfolioResult<Value> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "content API request");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
