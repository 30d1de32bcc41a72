// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Auction contract ABI surface.
//!
//! The `sol!`-generated call types are the exact ABI encoder; nothing in
//! this crate re-derives the standard encoding rules. The manual word
//! codec in [`crate::codec`] exists only for the legacy path.

use alloy_primitives::Address;
use alloy_sol_types::{sol, SolCall};

sol! {
    struct ProofVerificationData {
        bytes32 vkeyHash;
        bytes proof;
        bytes32[] publicInputs;
    }

    struct ServiceConfig {
        uint256 validityPeriodInSeconds;
        string domain;
        string scope;
        bool devMode;
    }

    struct ProofVerificationParams {
        bytes32 version;
        ProofVerificationData proofVerificationData;
        bytes committedInputs;
        ServiceConfig serviceConfig;
    }

    error InvalidProof();

    function register(ProofVerificationParams params, bool isIDCard) returns (bytes32);

    function submitBid(
        uint256[2] proofA,
        uint256[2][2] proofB,
        uint256[2] proofC,
        uint256[6] pubSignals,
        uint256 _bid
    ) payable;

    function userIdentifiers(address user) view returns (bytes32);

    function IsRegistered() view;
}

impl From<&emberbid_types::ProofVerificationParams> for ProofVerificationParams {
    fn from(p: &emberbid_types::ProofVerificationParams) -> Self {
        ProofVerificationParams {
            version: p.version,
            proofVerificationData: ProofVerificationData {
                vkeyHash: p.proof_verification_data.vkey_hash,
                proof: p.proof_verification_data.proof.clone(),
                publicInputs: p.proof_verification_data.public_inputs.clone(),
            },
            committedInputs: p.committed_inputs.clone(),
            serviceConfig: ServiceConfig {
                validityPeriodInSeconds: p.service_config.validity_period_in_seconds,
                domain: p.service_config.domain.clone(),
                scope: p.service_config.scope.clone(),
                devMode: p.service_config.dev_mode,
            },
        }
    }
}

/// Calldata for `register(params, isIDCard)`.
pub fn encode_register(params: &emberbid_types::ProofVerificationParams, is_id_card: bool) -> Vec<u8> {
    registerCall {
        params: params.into(),
        isIDCard: is_id_card,
    }
    .abi_encode()
}

/// Calldata for `userIdentifiers(user)`.
pub fn encode_user_identifiers(user: Address) -> Vec<u8> {
    userIdentifiersCall { user }.abi_encode()
}

/// Calldata for the `IsRegistered()` view probe.
pub fn encode_is_registered() -> Vec<u8> {
    IsRegisteredCall {}.abi_encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Bytes, B256, U256};
    use alloy_sol_types::SolError;

    fn sample_params() -> emberbid_types::ProofVerificationParams {
        emberbid_types::ProofVerificationParams {
            version: B256::with_last_byte(1),
            proof_verification_data: emberbid_types::ProofVerificationData {
                vkey_hash: B256::with_last_byte(0xaa),
                proof: Bytes::from(vec![0xde, 0xad]),
                public_inputs: vec![B256::with_last_byte(0xbb)],
            },
            committed_inputs: Bytes::from(vec![0xca, 0xfe]),
            service_config: emberbid_types::ServiceConfig {
                validity_period_in_seconds: U256::from(86400u64),
                domain: "localhost".into(),
                scope: "my-scope".into(),
                dev_mode: true,
            },
        }
    }

    #[test]
    fn register_calldata_starts_with_selector() {
        let data = encode_register(&sample_params(), false);
        assert_eq!(&data[..4], registerCall::SELECTOR);
        // dynamic struct + bool head
        assert!(data.len() > 4 + 2 * 32);
    }

    #[test]
    fn register_calldata_carries_scope_bytes() {
        let data = encode_register(&sample_params(), false);
        let hex = hex::encode(&data);
        assert!(hex.contains(&hex::encode("my-scope")));
    }

    #[test]
    fn view_calldata_is_selector_plus_args() {
        assert_eq!(encode_is_registered().len(), 4);
        let data = encode_user_identifiers(Address::repeat_byte(0x11));
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], userIdentifiersCall::SELECTOR);
    }

    #[test]
    fn invalid_proof_selector_is_stable() {
        // keccak("InvalidProof()")[..4]
        assert_eq!(InvalidProof::SELECTOR.len(), 4);
        let encoded = InvalidProof {}.abi_encode();
        assert_eq!(encoded, InvalidProof::SELECTOR.to_vec());
    }
}
