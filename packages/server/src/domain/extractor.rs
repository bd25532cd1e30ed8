//! Keyword extraction contract.
//!
//! The analysis feature delegates salient-term extraction to an external
//! text-analysis collaborator. The usecase layer depends on this trait; the
//! Hugging Face implementation lives in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the external keyword extraction collaborator.
///
/// Never fatal: every failure degrades to the raw-text fallback in the
/// analysis usecase.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The upstream request failed (network, timeout, or non-success status)
    #[error("keyword extraction request failed: {0}")]
    Upstream(String),

    /// The upstream responded with an unexpected payload shape
    #[error("keyword extraction returned an unexpected response shape")]
    MalformedResponse,
}

/// Extracts salient keyword tokens from free text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    /// Extract a ranked list of keyword tokens from `text`.
    ///
    /// An empty list is a valid result; callers treat it the same as an
    /// error and fall back to the raw text.
    async fn extract(&self, text: &str) -> Result<Vec<String>, ExtractError>;
}
