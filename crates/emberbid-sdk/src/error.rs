// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Typed errors for [`AuctionClient`](crate::client::AuctionClient) operations.
//!
//! Validation errors (`InvalidProofShape`, `MalformedFieldElement`) fire
//! before any network round trip and are not retryable. Wallet-layer
//! errors (`NoWalletConnected`, `UserRejected`) need user action.
//! `Network` failures are transient; read-only operations are safe to
//! retry, a submission is not until the caller has checked whether it
//! already landed.

use alloy_primitives::B256;

use crate::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum AuctionError {
    #[error("invalid proof shape: {field} expected {expected} elements, got {got}")]
    InvalidProofShape {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("malformed field element in {field}: {value:?}")]
    MalformedFieldElement { field: &'static str, value: String },

    #[error("no wallet account connected")]
    NoWalletConnected,

    #[error("user rejected the wallet request")]
    UserRejected,

    #[error("simulation predicts revert: {}", reason.as_deref().unwrap_or("no reason available"))]
    SimulationReverted {
        reason: Option<String>,
        /// Raw revert data as returned by the node, for diagnostics.
        data: Option<String>,
    },

    #[error("transaction {tx_hash} reverted: {}", reason.as_deref().unwrap_or("no reason available"))]
    TransactionReverted {
        tx_hash: B256,
        reason: Option<String>,
    },

    #[error("network: {0}")]
    Network(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ProviderError> for AuctionError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected => AuctionError::UserRejected,
            other => AuctionError::Network(other.to_string()),
        }
    }
}

pub type AuctionResult<T> = Result<T, AuctionError>;
