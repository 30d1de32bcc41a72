// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Wallet provider access.
//!
//! The wallet is an external collaborator reached through a single
//! JSON-RPC-style request dispatch. [`WalletProvider`] is the seam;
//! [`RpcProvider`] talks to a wallet-capable HTTP endpoint (a browser
//! wallet bridge or a dev node with unlocked accounts), and
//! [`MockProvider`](crate::mock::MockProvider) backs the tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// EIP-1193: the user rejected the request in the wallet UI.
const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("user rejected the wallet request")]
    UserRejected,

    #[error("rpc {method} failed with code {code}: {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
        /// Hex-encoded revert data, when the node attached any.
        data: Option<String>,
    },

    #[error("transport: {0}")]
    Transport(String),

    #[error("malformed rpc response: {0}")]
    Response(String),
}

/// Request dispatch into the wallet.
///
/// Borrowed per call; the provider owns no workflow state. The default
/// methods cover the two read probes every workflow needs.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Accounts the wallet currently exposes.
    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        let result = self.request("eth_accounts", json!([])).await?;
        serde_json::from_value(result).map_err(|e| ProviderError::Response(e.to_string()))
    }

    /// First connected account, if any.
    async fn connected_account(&self) -> Result<Option<String>, ProviderError> {
        Ok(self.accounts().await?.into_iter().next())
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let result = self.request("eth_chainId", json!([])).await?;
        let hex_str = result
            .as_str()
            .ok_or_else(|| ProviderError::Response("eth_chainId: expected hex string".into()))?;
        u64::from_str_radix(hex_str.trim_start_matches("0x"), 16)
            .map_err(|e| ProviderError::Response(format!("eth_chainId: {e}")))
    }
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'a str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize, Debug)]
struct JsonRpcError {
    code: i64,
    message: String,
    data: Option<Value>,
}

/// Minimal JSON-RPC client over HTTP.
pub struct RpcProvider {
    url: String,
    client: reqwest::Client,
    id: AtomicU64,
}

impl RpcProvider {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
            id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl WalletProvider for RpcProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = self.id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        debug!(method, %id, "wallet rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("{method}: {e}")))?;

        let body: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Response(format!("{method}: {e}")))?;

        if let Some(err) = body.error {
            if err.code == USER_REJECTED_CODE {
                return Err(ProviderError::UserRejected);
            }
            // Revert data arrives either as a bare hex string or nested
            // under `data.data` depending on the node.
            let data = match &err.data {
                Some(Value::String(s)) => Some(s.clone()),
                Some(v) => v.get("data").and_then(Value::as_str).map(String::from),
                None => None,
            };
            return Err(ProviderError::Rpc {
                method: method.to_string(),
                code: err.code,
                message: err.message,
                data,
            });
        }

        body.result
            .ok_or_else(|| ProviderError::Response(format!("{method}: response has no result")))
    }
}
