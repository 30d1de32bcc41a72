//! Identity-verification SDK access.
//!
//! Proof verification is delegated entirely to the external verification
//! service; this module only forwards the payload and reads back the
//! outcome.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Outcome of a verification call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOutcome {
    pub verified: bool,
    pub unique_identifier: Option<String>,
}

#[async_trait]
pub trait ProofVerifier: Send + Sync {
    async fn verify(&self, proofs: &Value, query_result: &Value) -> anyhow::Result<VerifyOutcome>;
}

/// Forwards proof payloads to the verification service over HTTP.
pub struct HttpVerifier {
    url: String,
    dev_mode: bool,
    http: reqwest::Client,
}

impl HttpVerifier {
    pub fn new(url: &str, dev_mode: bool) -> Self {
        Self {
            url: url.to_string(),
            dev_mode,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ProofVerifier for HttpVerifier {
    async fn verify(&self, proofs: &Value, query_result: &Value) -> anyhow::Result<VerifyOutcome> {
        let body = json!({
            "proofs": proofs,
            "queryResult": query_result,
            "devMode": self.dev_mode,
        });
        let outcome = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<VerifyOutcome>()
            .await?;
        Ok(outcome)
    }
}
