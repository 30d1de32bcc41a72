// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Proof-parameter marshalling for `submitBid`.
//!
//! Reshapes a prover-native Groth16 proof into the tuple layout the
//! verifying contract expects. Two points matter:
//!
//! - `pi_a`/`pi_c` keep only their first two elements (provers may emit
//!   a third homogeneous coordinate).
//! - each `pi_b` row has its inner pair swapped, `[a, b] -> [b, a]`:
//!   the verifier consumes Fq2 coefficients in the opposite order from
//!   the prover's output. A proof without the swap is well-shaped but
//!   fails the pairing check on-chain.

use alloy_primitives::U256;
use alloy_sol_types::SolCall;

use emberbid_types::Groth16Proof;

use crate::abi;
use crate::codec;
use crate::error::{AuctionError, AuctionResult};

/// `submitBid` takes exactly this many public signals.
pub const PUBLIC_SIGNAL_COUNT: usize = 6;

/// A proof in contract-ready coordinate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractProof {
    pub a: [U256; 2],
    pub b: [[U256; 2]; 2],
    pub c: [U256; 2],
}

fn field_element(field: &'static str, value: &str) -> AuctionResult<U256> {
    codec::parse_uint256(value).map_err(|_| AuctionError::MalformedFieldElement {
        field,
        value: value.to_string(),
    })
}

fn check_len(field: &'static str, got: usize, expected: usize) -> AuctionResult<()> {
    if got < expected {
        return Err(AuctionError::InvalidProofShape {
            field,
            expected,
            got,
        });
    }
    Ok(())
}

/// Validate shape and convert to contract coordinate order.
pub fn adapt_proof(proof: &Groth16Proof) -> AuctionResult<ContractProof> {
    check_len("pi_a", proof.pi_a.len(), 2)?;
    check_len("pi_b", proof.pi_b.len(), 2)?;
    check_len("pi_c", proof.pi_c.len(), 2)?;
    for row in &proof.pi_b[..2] {
        check_len("pi_b", row.len(), 2)?;
    }

    let a = [
        field_element("pi_a", &proof.pi_a[0])?,
        field_element("pi_a", &proof.pi_a[1])?,
    ];
    // coordinate swap per row, required by the verifier's pairing convention
    let b = [
        [
            field_element("pi_b", &proof.pi_b[0][1])?,
            field_element("pi_b", &proof.pi_b[0][0])?,
        ],
        [
            field_element("pi_b", &proof.pi_b[1][1])?,
            field_element("pi_b", &proof.pi_b[1][0])?,
        ],
    ];
    let c = [
        field_element("pi_c", &proof.pi_c[0])?,
        field_element("pi_c", &proof.pi_c[1])?,
    ];

    Ok(ContractProof { a, b, c })
}

/// Validate and convert the public-signal vector for the bid path.
pub fn adapt_signals(signals: &[String]) -> AuctionResult<[U256; PUBLIC_SIGNAL_COUNT]> {
    if signals.len() != PUBLIC_SIGNAL_COUNT {
        return Err(AuctionError::InvalidProofShape {
            field: "publicSignals",
            expected: PUBLIC_SIGNAL_COUNT,
            got: signals.len(),
        });
    }
    let mut out = [U256::ZERO; PUBLIC_SIGNAL_COUNT];
    for (slot, signal) in out.iter_mut().zip(signals) {
        *slot = field_element("publicSignals", signal)?;
    }
    Ok(out)
}

/// Exact calldata for `submitBid(proofA, proofB, proofC, pubSignals, _bid)`.
///
/// Fails before returning anything submittable if the proof or signal
/// vector is malformed.
pub fn encode_submit_bid(
    proof: &Groth16Proof,
    public_signals: &[String],
    bid: U256,
) -> AuctionResult<Vec<u8>> {
    let adapted = adapt_proof(proof)?;
    let signals = adapt_signals(public_signals)?;

    let call = abi::submitBidCall {
        proofA: adapted.a,
        proofB: adapted.b,
        proofC: adapted.c,
        pubSignals: signals,
        _bid: bid,
    };
    Ok(call.abi_encode())
}
