use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::retry::{execute_with_retry, is_retryable_error};
use crate::{EmbedError, EmbedderConfig, EmbeddingProvider};

/// Remote embedding client speaking the OpenAI wire format.
///
/// Sends `{"input": text, "model": model}` and reads the vector out of
/// `data[0].embedding`. Transient failures are retried per the config's
/// [`RetryConfig`](crate::RetryConfig); non-retryable errors fail fast.
pub struct ApiEmbedder {
    client: reqwest::Client,
    config: EmbedderConfig,
}

impl ApiEmbedder {
    pub fn new(config: EmbedderConfig) -> Result<Self, EmbedError> {
        if config.api_url.is_empty() {
            return Err(EmbedError::InvalidConfig("api_url must not be empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| EmbedError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    async fn send_request(&self, payload: &Value) -> Result<Value, EmbedError> {
        let mut request = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json");
        if let Some(key) = self.config.api_key.as_deref() {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = request
            .json(payload)
            .send()
            .await
            .map_err(|e| EmbedError::Http(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedError::Provider(format!("HTTP error {status}: {body}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| EmbedError::Provider(format!("invalid JSON response: {e}")))
    }
}

#[async_trait]
impl EmbeddingProvider for ApiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let payload = json!({ "input": text, "model": self.config.model_name });

        let response = execute_with_retry(&self.config.retry, |attempt| {
            let payload = payload.clone();
            async move {
                if attempt > 0 {
                    tracing::warn!(attempt, url = %self.config.api_url, "retrying embedding request");
                }

                match self.send_request(&payload).await {
                    Ok(response) => Ok(response),
                    Err(e) => {
                        let error_str = e.to_string();
                        if is_retryable_error(&error_str) {
                            Err(error_str)
                        } else {
                            Err(format!("non-retryable error: {error_str}"))
                        }
                    }
                }
            }
        })
        .await
        .map_err(EmbedError::Provider)?;

        parse_embedding(response)
    }
}

/// Extract the first embedding vector from a `{"data": [{"embedding": ..}]}`
/// response body.
fn parse_embedding(value: Value) -> Result<Vec<f32>, EmbedError> {
    let Value::Object(mut map) = value else {
        return Err(EmbedError::Provider(
            "unsupported API response shape".into(),
        ));
    };

    let Some(Value::Array(items)) = map.remove("data") else {
        return Err(EmbedError::Provider(
            "API response missing `data` array".into(),
        ));
    };

    let first = items.into_iter().next().ok_or_else(|| {
        EmbedError::Provider("API response did not contain embeddings".into())
    })?;

    let Value::Object(mut obj) = first else {
        return Err(EmbedError::Provider(
            "unexpected entry inside `data` array".into(),
        ));
    };

    let embedding = obj.remove("embedding").ok_or_else(|| {
        EmbedError::Provider("missing `embedding` field in data item".into())
    })?;

    parse_vector(embedding)
}

fn parse_vector(value: Value) -> Result<Vec<f32>, EmbedError> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .map(|entry| match entry {
                Value::Number(num) => num
                    .as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| EmbedError::Provider("non-finite embedding value".into())),
                other => Err(EmbedError::Provider(format!(
                    "embedding entries must be numbers, got {other:?}"
                ))),
            })
            .collect(),
        other => Err(EmbedError::Provider(format!(
            "embedding vector must be an array, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_openai_shaped_response() {
        let body = json!({
            "object": "list",
            "data": [
                { "object": "embedding", "index": 0, "embedding": [0.1, -0.2, 0.3] }
            ],
            "model": "text-embedding-3-small",
            "usage": { "prompt_tokens": 5, "total_tokens": 5 }
        });

        let vector = parse_embedding(body).unwrap();
        assert_eq!(vector, vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn parse_takes_first_embedding_when_multiple() {
        let body = json!({
            "data": [
                { "embedding": [1.0, 2.0] },
                { "embedding": [3.0, 4.0] }
            ]
        });
        assert_eq!(parse_embedding(body).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn parse_rejects_missing_data() {
        let err = parse_embedding(json!({ "error": "rate limited" })).unwrap_err();
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn parse_rejects_empty_data() {
        let err = parse_embedding(json!({ "data": [] })).unwrap_err();
        assert!(err.to_string().contains("did not contain embeddings"));
    }

    #[test]
    fn parse_rejects_non_numeric_entries() {
        let err = parse_embedding(json!({ "data": [{ "embedding": [1.0, "x"] }] })).unwrap_err();
        assert!(err.to_string().contains("must be numbers"));
    }

    #[test]
    fn new_rejects_empty_url() {
        let cfg = EmbedderConfig {
            api_url: String::new(),
            ..EmbedderConfig::default()
        };
        assert!(matches!(
            ApiEmbedder::new(cfg),
            Err(EmbedError::InvalidConfig(_))
        ));
    }
}
