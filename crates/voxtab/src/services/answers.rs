//! Question-answering client
//!
//! GET the configured endpoint with `q=<query>&format=json`; the useful
//! part of the response is the `AbstractText` field.

use async_trait::async_trait;
use serde::Deserialize;
use voxtab_common::HostError;

/// Question-answering seam. `Ok(None)` means the service had no abstract
/// for the query.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, query: &str) -> Result<Option<String>, HostError>;
}

#[derive(Debug, Deserialize)]
struct AnswerResponse {
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
}

/// Client for the question-answering HTTP endpoint.
pub struct HttpAnswerService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, query: &str) -> Result<Option<String>, HostError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(HostError::remote)?;

        if !resp.status().is_success() {
            return Err(HostError::Remote(format!(
                "answer service failed with status {}",
                resp.status()
            )));
        }

        let parsed: AnswerResponse = resp.json().await.map_err(HostError::remote)?;
        if parsed.abstract_text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parsed.abstract_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_text_parses() {
        let resp: AnswerResponse =
            serde_json::from_str(r#"{"AbstractText":"Rust is a language."}"#).unwrap();
        assert_eq!(resp.abstract_text, "Rust is a language.");
    }

    #[test]
    fn test_missing_abstract_is_empty() {
        let resp: AnswerResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.abstract_text.is_empty());
    }
}
