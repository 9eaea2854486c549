use std::time::Duration;

use async_trait::async_trait;
use ranker::CorpusRecord;
use serde_json::Value;

use crate::{CorpusError, CorpusStore};

/// PostgREST-backed corpus store.
///
/// Fetches `GET {base}/rest/v1/{table}?select=id,application_text,vector`
/// with the key in both the `apikey` and `Authorization` headers, the way
/// Supabase's REST layer expects. The `vector` column is accepted as a JSON
/// number array or as a pgvector text literal (`"[0.1,0.2]"`).
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestStore {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, CorpusError> {
        let base_url: String = base_url.into();
        let table: String = table.into();
        if base_url.is_empty() {
            return Err(CorpusError::Store("base_url must not be empty".into()));
        }
        if table.is_empty() {
            return Err(CorpusError::Store("table must not be empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CorpusError::Store(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=id,application_text,vector",
            self.base_url, self.table
        )
    }
}

#[async_trait]
impl CorpusStore for RestStore {
    async fn fetch_all(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        let response = self
            .client
            .get(self.endpoint())
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| CorpusError::Http(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CorpusError::Store(format!("HTTP error {status}: {body}")));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| CorpusError::Decode(format!("invalid JSON response: {e}")))?;

        tracing::debug!(rows = rows.len(), table = %self.table, "fetched corpus snapshot");

        rows.into_iter().map(decode_row).collect()
    }
}

fn decode_row(row: Value) -> Result<CorpusRecord, CorpusError> {
    let Value::Object(mut obj) = row else {
        return Err(CorpusError::Decode("row is not a JSON object".into()));
    };

    let id = match obj.remove("id") {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(CorpusError::Decode(format!(
                "id must be a string or number, got {other:?}"
            )))
        }
        None => return Err(CorpusError::Decode("row missing `id` column".into())),
    };

    let text = match obj.remove("application_text") {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => {
            return Err(CorpusError::Decode(format!(
                "application_text must be a string, got {other:?}"
            )))
        }
    };

    let vector = match obj.remove("vector") {
        Some(value) => decode_vector(value)?,
        None => return Err(CorpusError::Decode("row missing `vector` column".into())),
    };

    Ok(CorpusRecord { id, text, vector })
}

/// Decode a vector column that arrives either as a JSON array of numbers or
/// as a pgvector text literal like `"[0.1,0.2,0.3]"`.
fn decode_vector(value: Value) -> Result<Vec<f32>, CorpusError> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .map(|entry| match entry {
                Value::Number(num) => num
                    .as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| CorpusError::Decode("non-finite vector value".into())),
                other => Err(CorpusError::Decode(format!(
                    "vector entries must be numbers, got {other:?}"
                ))),
            })
            .collect(),
        Value::String(literal) => {
            let inner = literal
                .trim()
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .ok_or_else(|| {
                    CorpusError::Decode(format!("malformed vector literal: {literal:?}"))
                })?;
            if inner.trim().is_empty() {
                return Ok(Vec::new());
            }
            inner
                .split(',')
                .map(|part| {
                    part.trim().parse::<f32>().map_err(|e| {
                        CorpusError::Decode(format!("bad vector component {part:?}: {e}"))
                    })
                })
                .collect()
        }
        other => Err(CorpusError::Decode(format!(
            "vector must be an array or text literal, got {other:?}"
        ))),
    }
}
