// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! # emberbid-sdk
//!
//! Client library for **Emberbid** — identity-gated sealed-bid auctions
//! on Ethereum.
//!
//! `emberbid-sdk` provides everything a dapp or tool needs to marshal a
//! Groth16 proof into contract-ready form, build and submit the
//! registration and bid transactions through a wallet provider, and poll
//! for confirmation with best-effort revert decoding.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports core types (`Groth16Proof`, `AuctionClient`, …) |
//! | [`provider`] | Wallet JSON-RPC dispatch (`WalletProvider`, `RpcProvider`) |
//! | [`abi`] | Auction contract ABI surface (`sol!` call/error types) |
//! | [`codec`] | Fixed-width uint256 word encoding (legacy path) |
//! | [`adapter`] | Proof-parameter validation, coordinate swap, calldata |
//! | [`submit`] | Transaction envelope construction and submission |
//! | [`confirm`] | Receipt polling and revert-reason recovery |
//! | [`client`] | Register / submit-bid workflows, registration probe |
//! | [`handshake`] | One-shot verification handshake with the identity app |
//! | [`wallet`] | Client configuration persistence |
//! | [`mock`] | Scripted provider for tests |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use emberbid_sdk::{AuctionClient, Groth16Proof, RpcProvider};
//!
//! # async fn example(proof_json: &str) -> emberbid_sdk::AuctionResult<()> {
//! let provider = RpcProvider::new("http://localhost:8545");
//! let client = AuctionClient::new(
//!     provider,
//!     "0x4242424242424242424242424242424242424242".parse().unwrap(),
//! );
//!
//! let proof = Groth16Proof::from_json(proof_json).unwrap();
//! let signals: Vec<String> = (1..=6).map(|n| n.to_string()).collect();
//! let tx_hash = client.submit_bid(&proof, &signals, "1000000000000000").await?;
//! println!("bid landed in {tx_hash}");
//! # Ok(())
//! # }
//! ```

// Re-exports from emberbid-types
pub use emberbid_types::{
    Groth16Proof, ProofResult, ProofVerificationData, ProofVerificationParams, ServiceConfig,
    TransactionRecord, TxStatus,
};

pub mod abi;
pub mod adapter;
pub mod client;
pub mod codec;
pub mod confirm;
pub mod error;
pub mod handshake;
pub mod mock;
pub mod provider;
pub mod submit;
pub mod wallet;

pub use client::{network_name, AuctionClient, RegistrationEvidence, SimulationPolicy};
pub use confirm::ConfirmPolicy;
pub use error::{AuctionError, AuctionResult};
pub use provider::{ProviderError, RpcProvider, WalletProvider};
