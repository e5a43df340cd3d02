//! Entity-extraction client
//!
//! POST `{document: {type, content}, encodingType}` to the configured
//! endpoint with the API key as the `key` query parameter; the response is
//! `{entities: [{name, type}]}`.

use async_trait::async_trait;
use voxtab_common::entities::{Entity, EntityRequest, EntityResponse};
use voxtab_common::HostError;

/// Entity-extraction seam.
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Vec<Entity>, HostError>;
}

/// Client for the entity-extraction HTTP endpoint.
pub struct HttpEntityExtractor {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpEntityExtractor {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl EntityExtractor for HttpEntityExtractor {
    async fn analyze(&self, text: &str) -> Result<Vec<Entity>, HostError> {
        let request = EntityRequest::plain_text(text);

        let resp = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(HostError::remote)?;

        if !resp.status().is_success() {
            return Err(HostError::Remote(format!(
                "entity extraction failed with status {}",
                resp.status()
            )));
        }

        let parsed: EntityResponse = resp.json().await.map_err(HostError::remote)?;
        Ok(parsed.entities)
    }
}
