// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! High-level auction workflows.
//!
//! [`AuctionClient`] wraps a wallet provider and a contract address into
//! the two end-to-end operations the system supports — register and
//! submit-sealed-bid — plus the registration probe. The client holds no
//! mutable state; every call is independently retryable because all
//! state lives in the wallet and on-chain.
//!
//! ```rust,no_run
//! use emberbid_sdk::client::AuctionClient;
//! use emberbid_sdk::provider::RpcProvider;
//!
//! # async fn example(params: emberbid_types::ProofVerificationParams) -> emberbid_sdk::error::AuctionResult<()> {
//! let provider = RpcProvider::new("http://localhost:8545");
//! let client = AuctionClient::new(provider, "0x1111111111111111111111111111111111111111".parse().unwrap());
//! let tx_hash = client.register(&params, false).await?;
//! # Ok(())
//! # }
//! ```

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolCall;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use emberbid_types::{Groth16Proof, ProofVerificationParams, TxStatus};

use crate::abi;
use crate::adapter;
use crate::codec;
use crate::confirm::{self, ConfirmPolicy};
use crate::error::{AuctionError, AuctionResult};
use crate::provider::{ProviderError, WalletProvider};
use crate::submit;

/// Scope used when the verifier parameters arrive with an empty one.
/// Must match the scope the verification request was created with, or
/// the on-chain service-config check and the proof disagree.
pub const FALLBACK_SCOPE: &str = "my-scope";

/// What to do when the pre-submission dry run predicts a revert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationPolicy {
    /// Abort with the decoded reason before spending gas.
    #[default]
    Block,
    /// Log the predicted revert and submit anyway.
    Warn,
    /// Don't simulate.
    Skip,
}

/// Which probe in the registration fallback chain answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvidence {
    /// `userIdentifiers` returned a nonzero identifier.
    Identifier(B256),
    /// `userIdentifiers` returned zero.
    NotRegistered,
    /// `userIdentifiers` reverted; the `IsRegistered()` view probe
    /// answered via call success/failure instead.
    ViewProbe(bool),
}

impl RegistrationEvidence {
    pub fn is_registered(&self) -> bool {
        match self {
            RegistrationEvidence::Identifier(_) => true,
            RegistrationEvidence::NotRegistered => false,
            RegistrationEvidence::ViewProbe(registered) => *registered,
        }
    }
}

pub struct AuctionClient<P> {
    provider: P,
    contract: Address,
    simulation: SimulationPolicy,
    confirm: ConfirmPolicy,
}

impl<P: WalletProvider> AuctionClient<P> {
    pub fn new(provider: P, contract: Address) -> Self {
        Self {
            provider,
            contract,
            simulation: SimulationPolicy::default(),
            confirm: ConfirmPolicy::default(),
        }
    }

    pub fn with_simulation_policy(mut self, policy: SimulationPolicy) -> Self {
        self.simulation = policy;
        self
    }

    pub fn with_confirm_policy(mut self, policy: ConfirmPolicy) -> Self {
        self.confirm = policy;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Register for the auction with verifier parameters from the
    /// identity SDK.
    ///
    /// Defaults an empty scope, optionally dry-runs the call to surface
    /// a decoded revert before gas is spent, then submits and awaits
    /// confirmation.
    pub async fn register(
        &self,
        params: &ProofVerificationParams,
        is_id_card: bool,
    ) -> AuctionResult<B256> {
        let mut params = params.clone();
        if params.service_config.scope.is_empty() {
            params.service_config.scope = FALLBACK_SCOPE.to_string();
        }
        let data = abi::encode_register(&params, is_id_card);

        let from = self
            .provider
            .connected_account()
            .await
            .map_err(AuctionError::from)?
            .ok_or(AuctionError::NoWalletConnected)?;

        if self.simulation != SimulationPolicy::Skip {
            if let Err(err) = self.simulate(&from, &data).await {
                match self.simulation {
                    SimulationPolicy::Block => return Err(err),
                    SimulationPolicy::Warn => {
                        warn!(error = %err, "dry run predicts revert; submitting anyway")
                    }
                    SimulationPolicy::Skip => unreachable!(),
                }
            }
        }

        let tx_hash =
            submit::send_transaction(&self.provider, self.contract, U256::ZERO, &data).await?;
        self.await_success(tx_hash).await
    }

    /// Submit a sealed bid backed by a Groth16 proof.
    ///
    /// Proof and signal validation happens before any network call.
    pub async fn submit_bid(
        &self,
        proof: &Groth16Proof,
        public_signals: &[String],
        bid_amount: &str,
    ) -> AuctionResult<B256> {
        let bid = codec::parse_uint256(bid_amount).map_err(|_| {
            AuctionError::MalformedFieldElement {
                field: "bid",
                value: bid_amount.to_string(),
            }
        })?;
        let data = adapter::encode_submit_bid(proof, public_signals, bid)?;

        let tx_hash =
            submit::send_transaction(&self.provider, self.contract, U256::ZERO, &data).await?;
        self.await_success(tx_hash).await
    }

    /// Probe whether `user` is registered.
    ///
    /// Ordered fallback chain: `userIdentifiers(user)` first; if that
    /// call reverts, the `IsRegistered()` view probe (which reverts for
    /// strangers) decides.
    pub async fn registration_status(&self, user: Address) -> AuctionResult<RegistrationEvidence> {
        let call = json!({
            "to": self.contract.to_string(),
            "data": format!("0x{}", hex::encode(abi::encode_user_identifiers(user))),
        });
        match self.provider.request("eth_call", json!([call, "latest"])).await {
            Ok(result) => {
                let raw = result.as_str().ok_or_else(|| {
                    AuctionError::Network("eth_call: expected hex result".into())
                })?;
                let bytes = hex::decode(raw.trim_start_matches("0x"))
                    .map_err(|e| AuctionError::Network(format!("eth_call result: {e}")))?;
                let identifier = abi::userIdentifiersCall::abi_decode_returns(&bytes)
                    .map_err(|e| AuctionError::Network(format!("userIdentifiers decode: {e}")))?;
                if identifier.is_zero() {
                    Ok(RegistrationEvidence::NotRegistered)
                } else {
                    Ok(RegistrationEvidence::Identifier(identifier))
                }
            }
            Err(ProviderError::Rpc { .. }) => {
                let probe = json!({
                    "from": user.to_string(),
                    "to": self.contract.to_string(),
                    "data": format!("0x{}", hex::encode(abi::encode_is_registered())),
                });
                match self.provider.request("eth_call", json!([probe, "latest"])).await {
                    Ok(_) => Ok(RegistrationEvidence::ViewProbe(true)),
                    Err(ProviderError::Rpc { .. }) => Ok(RegistrationEvidence::ViewProbe(false)),
                    Err(other) => Err(other.into()),
                }
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn simulate(&self, from: &str, data: &[u8]) -> AuctionResult<()> {
        let call = json!({
            "from": from,
            "to": self.contract.to_string(),
            "data": format!("0x{}", hex::encode(data)),
        });
        match self.provider.request("eth_call", json!([call, "latest"])).await {
            Ok(_) => Ok(()),
            Err(ProviderError::Rpc { message, data, .. }) => {
                let reason = data
                    .as_deref()
                    .and_then(confirm::decode_revert_data)
                    .or_else(|| message.contains("revert").then(|| message.clone()));
                Err(AuctionError::SimulationReverted { reason, data })
            }
            // transport failure is not a predicted revert
            Err(other) => Err(other.into()),
        }
    }

    async fn await_success(&self, tx_hash: B256) -> AuctionResult<B256> {
        let record = confirm::wait_for_transaction(&self.provider, tx_hash, self.confirm).await?;
        match record.status {
            TxStatus::Success => Ok(tx_hash),
            TxStatus::Reverted { reason } => {
                Err(AuctionError::TransactionReverted { tx_hash, reason })
            }
            TxStatus::Pending => Err(AuctionError::Network(format!(
                "transaction {tx_hash} still pending after confirmation wait"
            ))),
        }
    }
}

/// Human-readable network name for a chain id.
pub fn network_name(chain_id: u64) -> String {
    match chain_id {
        1 => "Ethereum Mainnet".to_string(),
        5 => "Goerli Testnet".to_string(),
        11_155_111 => "Sepolia Testnet".to_string(),
        80_002 => "Polygon Amoy Testnet".to_string(),
        other => format!("Chain ID: 0x{other:x}"),
    }
}

/// Block-explorer link for a transaction on the given network.
pub fn explorer_tx_url(network: &str, tx_hash: B256) -> String {
    if network.contains("Sepolia") {
        format!("https://sepolia.etherscan.io/tx/{tx_hash}")
    } else {
        format!("https://etherscan.io/tx/{tx_hash}")
    }
}
