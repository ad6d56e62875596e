use thiserror::Error;

/// Errors raised by authorization links and chains.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The list adapter returned an access code outside the four recognized
    /// buckets. This is an integration defect in the adapter, not a
    /// transient condition; there is nothing to retry.
    #[error("link '{link}': list adapter returned invalid access code {code}")]
    InvalidStatusCode { link: String, code: i64 },

    /// A chain with no links cannot render a verdict.
    #[error("authorization chain '{chain}' has no links")]
    EmptyChain { chain: String },

    #[error("failed to parse authorization config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid authorization config: {reason}")]
    InvalidConfig { reason: String },
}
