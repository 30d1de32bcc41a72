//! Verifier parameters produced by the identity-verification SDK.
//!
//! These mirror the tuple layout the auction contract's `register`
//! function expects. The SDK emits them as camelCase JSON; nothing here
//! is computed locally, the client only forwards the values (after
//! defaulting an empty `scope`, see the sdk crate).

use alloy_primitives::{Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Opaque proof bundle produced by the identity-verification SDK.
///
/// The client never inspects this; it is handed back to the SDK's own
/// parameter transform and to the demo registration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofResult(pub serde_json::Value);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofVerificationData {
    pub vkey_hash: B256,
    pub proof: Bytes,
    pub public_inputs: Vec<B256>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub validity_period_in_seconds: U256,
    pub domain: String,
    pub scope: String,
    pub dev_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofVerificationParams {
    pub version: B256,
    pub proof_verification_data: ProofVerificationData,
    pub committed_inputs: Bytes,
    pub service_config: ServiceConfig,
}
