// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Receipt polling and revert-reason recovery.
//!
//! A submitted transaction is `Pending` until the chain mines it, then
//! terminally `Success` or `Reverted`. On revert the poller attempts,
//! in order: decoding the replayed call's error data against the known
//! contract errors, manual `Error(string)` decoding, and finally the
//! bare reverted status. No decoding failure escapes the poller.

use std::time::Duration;

use alloy_primitives::B256;
use alloy_sol_types::SolError;
use serde_json::{json, Value};
use tracing::debug;

use emberbid_types::{TransactionRecord, TxStatus};

use crate::abi;
use crate::error::{AuctionError, AuctionResult};
use crate::provider::{ProviderError, WalletProvider};

/// Delay between receipt checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Attempt cap. Uncapped polling never terminates under a network
/// partition, so confirmation gives up after roughly five minutes and
/// reports a timeout the caller can distinguish from a revert.
pub const MAX_POLL_ATTEMPTS: u32 = 150;

#[derive(Debug, Clone, Copy)]
pub struct ConfirmPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }
}

/// Poll until the transaction reaches a terminal status.
///
/// Abandoning the returned future does not cancel anything; the
/// transaction continues on-chain regardless.
pub async fn wait_for_transaction<P: WalletProvider + ?Sized>(
    provider: &P,
    tx_hash: B256,
    policy: ConfirmPolicy,
) -> AuctionResult<TransactionRecord> {
    for attempt in 0..policy.max_attempts {
        if attempt > 0 {
            tokio::time::sleep(policy.interval).await;
        }

        let receipt = provider
            .request("eth_getTransactionReceipt", json!([tx_hash]))
            .await
            .map_err(AuctionError::from)?;

        if receipt.is_null() {
            debug!(%tx_hash, attempt, "receipt not yet available");
            continue;
        }

        match receipt.get("status").and_then(Value::as_str) {
            Some("0x1") => {
                return Ok(TransactionRecord {
                    hash: tx_hash,
                    status: TxStatus::Success,
                })
            }
            Some("0x0") => {
                let reason = recover_revert_reason(provider, tx_hash).await;
                return Ok(TransactionRecord {
                    hash: tx_hash,
                    status: TxStatus::Reverted { reason },
                });
            }
            // receipt without a usable status field: keep polling
            _ => continue,
        }
    }

    Err(AuctionError::Network(format!(
        "transaction {tx_hash} not confirmed after {} receipt checks",
        policy.max_attempts
    )))
}

/// Best-effort revert reason for a mined-but-failed transaction.
///
/// Replays the transaction via `eth_call` and decodes whatever error
/// data comes back. Every failure path degrades to `None`.
pub async fn recover_revert_reason<P: WalletProvider + ?Sized>(
    provider: &P,
    tx_hash: B256,
) -> Option<String> {
    let tx = provider
        .request("eth_getTransactionByHash", json!([tx_hash]))
        .await
        .ok()?;
    if tx.is_null() {
        return None;
    }

    let mut call = json!({});
    for key in ["from", "to", "value", "gas"] {
        if let Some(v) = tx.get(key) {
            call[key] = v.clone();
        }
    }
    if let Some(data) = tx.get("input").or_else(|| tx.get("data")) {
        call["data"] = data.clone();
    }

    match provider.request("eth_call", json!([call, "latest"])).await {
        // replay no longer reverts against latest state; nothing to decode
        Ok(_) => None,
        Err(ProviderError::Rpc { message, data, .. }) => {
            if let Some(reason) = data.as_deref().and_then(decode_revert_data) {
                return Some(reason);
            }
            if message.contains("revert") {
                return Some(message);
            }
            None
        }
        Err(_) => None,
    }
}

/// Decode hex revert data: known contract errors first, then the
/// standard `Error(string)` layout.
pub fn decode_revert_data(data: &str) -> Option<String> {
    let bytes = hex::decode(data.strip_prefix("0x").unwrap_or(data)).ok()?;
    if abi::InvalidProof::abi_decode(&bytes).is_ok() {
        return Some("InvalidProof()".to_string());
    }
    decode_error_string(&bytes)
}

/// Manual `Error(string)` decode: 4-byte selector, 32-byte offset,
/// 32-byte length, UTF-8 payload.
pub fn decode_error_string(bytes: &[u8]) -> Option<String> {
    const ERROR_STRING_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];

    if bytes.len() < 4 || bytes[..4] != ERROR_STRING_SELECTOR {
        return None;
    }
    let body = &bytes[4..];
    let offset = read_usize_word(body, 0)?;
    let len = read_usize_word(body, offset)?;
    let payload = body.get(offset + 32..offset + 32 + len)?;
    String::from_utf8(payload.to_vec()).ok()
}

fn read_usize_word(body: &[u8], at: usize) -> Option<usize> {
    let word = body.get(at..at + 32)?;
    if word[..24].iter().any(|&b| b != 0) {
        return None;
    }
    Some(u64::from_be_bytes(word[24..32].try_into().ok()?) as usize)
}
