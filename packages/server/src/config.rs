//! Server configuration.

use clap::Parser;

/// Relay server configuration, parsed from flags with environment overrides.
#[derive(Debug, Clone, Parser)]
#[command(name = "vakil-server", about = "Relay server for the Vakil legal chat", version)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Hugging Face token-classification model used for keyword extraction
    #[arg(
        long,
        env = "HF_KEYWORD_MODEL_URL",
        default_value = "https://api-inference.huggingface.co/models/ml6team/keyphrase-extraction-distilbert-inspec"
    )]
    pub hf_keyword_model_url: String,

    /// Hugging Face text-generation model behind /api/ipc-search
    #[arg(
        long,
        env = "HF_SEARCH_MODEL_URL",
        default_value = "https://api-inference.huggingface.co/models/google/flan-t5-large"
    )]
    pub hf_search_model_url: String,

    /// Hugging Face API token; anonymous calls are attempted when unset
    #[arg(long, env = "HF_TOKEN")]
    pub hf_token: Option<String>,

    /// Timeout for Hugging Face calls, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// Auto-clear a stale typing indicator after this many seconds.
    /// Off when unset: indicators are relayed stateless and clearing is the
    /// front end's responsibility.
    #[arg(long, env = "TYPING_TIMEOUT_SECS")]
    pub typing_timeout_secs: Option<u64>,
}
