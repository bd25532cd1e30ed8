//! Hugging Face inference API client.
//!
//! Serves two concerns: keyword extraction for the analysis feature (through
//! the domain's `KeywordExtractor` contract) and the raw text-generation
//! proxy behind `POST /api/ipc-search`. Every call carries the configured
//! bounded timeout; timeouts and transport failures are ordinary errors for
//! the caller to degrade on, never panics.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::domain::{ExtractError, KeywordExtractor};

/// Errors from Hugging Face upstream calls.
#[derive(Debug, Error)]
pub enum HfError {
    /// The request never produced a response (connect, timeout, body read)
    #[error("request to Hugging Face failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Hugging Face API returned status {0}")]
    Status(u16),
}

/// One span of a token-classification response; only the surface form is
/// needed here.
#[derive(Debug, Deserialize)]
struct KeywordSpan {
    word: String,
}

/// Thin client over the Hugging Face inference endpoints.
pub struct HfClient {
    http: reqwest::Client,
    keyword_model_url: String,
    search_model_url: String,
    token: Option<String>,
}

impl HfClient {
    /// Build a client from the server configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn new(config: &Config) -> Result<Self, HfError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            keyword_model_url: config.hf_keyword_model_url.clone(),
            search_model_url: config.hf_search_model_url.clone(),
            token: config.hf_token.clone(),
        })
    }

    fn post_inputs(&self, url: &str, inputs: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .post(url)
            .json(&serde_json::json!({ "inputs": inputs }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Forward a prompt to the text-generation model and return its raw JSON.
    ///
    /// # Errors
    ///
    /// Returns `HfError::Status` on a non-success response and
    /// `HfError::Request` on transport failures; the caller maps both to a
    /// 500 envelope without retrying
    pub async fn generate(&self, prompt: &str) -> Result<serde_json::Value, HfError> {
        let response = self
            .post_inputs(&self.search_model_url, prompt)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HfError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl KeywordExtractor for HfClient {
    async fn extract(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let response = self
            .post_inputs(&self.keyword_model_url, text)
            .send()
            .await
            .map_err(|e| ExtractError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Upstream(format!("status {status}")));
        }

        // Token-classification models answer with one span list per input
        let batches: Vec<Vec<KeywordSpan>> = response
            .json()
            .await
            .map_err(|_| ExtractError::MalformedResponse)?;

        Ok(batches
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|span| span.word)
            .collect())
    }
}
