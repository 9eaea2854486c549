use thiserror::Error;

/// Errors surfaced by embedding providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// Configuration is inconsistent (e.g., empty endpoint URL).
    #[error("invalid embedder config: {0}")]
    InvalidConfig(String),
    /// Transport-level failure reaching the provider.
    #[error("embedding request failed: {0}")]
    Http(String),
    /// The provider answered, but with a non-success status or a response
    /// that did not contain a usable embedding.
    #[error("embedding provider error: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_detail() {
        let err = EmbedError::InvalidConfig("api_url must not be empty".into());
        assert!(err.to_string().contains("api_url must not be empty"));

        let err = EmbedError::Http("connection reset".into());
        assert!(err.to_string().contains("connection reset"));

        let err = EmbedError::Provider("HTTP 500: upstream".into());
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn all_variants_cloneable() {
        let variants = vec![
            EmbedError::InvalidConfig("a".into()),
            EmbedError::Http("b".into()),
            EmbedError::Provider("c".into()),
        ];
        for err in variants {
            let cloned = err.clone();
            assert_eq!(err, cloned);
        }
    }
}
