// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Integration test: proves emberbid-sdk is usable as an external
//! dependency. All imports go through `emberbid_sdk::` — no internal
//! crate paths.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde_json::json;

use emberbid_sdk::mock::MockProvider;
use emberbid_sdk::{
    AuctionClient, AuctionError, Groth16Proof, ProofVerificationData, ProofVerificationParams,
    ServiceConfig, SimulationPolicy, WalletProvider,
};

const ACCOUNT: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const TX_HASH: &str = "0x4444444444444444444444444444444444444444444444444444444444444444";

fn proof() -> Groth16Proof {
    Groth16Proof::from_json(
        r#"{
            "pi_a": ["10", "11", "1"],
            "pi_b": [["20", "21"], ["22", "23"], ["1", "0"]],
            "pi_c": ["30", "31", "1"],
            "protocol": "groth16",
            "curve": "bn128"
        }"#,
    )
    .unwrap()
}

fn verifier_params() -> ProofVerificationParams {
    ProofVerificationParams {
        version: B256::with_last_byte(1),
        proof_verification_data: ProofVerificationData {
            vkey_hash: B256::with_last_byte(0xaa),
            proof: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
            public_inputs: vec![B256::with_last_byte(0x01), B256::with_last_byte(0x02)],
        },
        committed_inputs: Bytes::from(vec![0xca, 0xfe]),
        service_config: ServiceConfig {
            validity_period_in_seconds: U256::from(86400u64),
            domain: "localhost".into(),
            // empty on purpose: the client must fall back
            scope: String::new(),
            dev_mode: true,
        },
    }
}

// ── end-to-end bid flow against a scripted provider ──

#[tokio::test]
async fn bid_flow_end_to_end() {
    let mock = MockProvider::new();
    mock.push_ok(json!([ACCOUNT])); // eth_accounts
    mock.push_ok(json!(TX_HASH)); // eth_sendTransaction
    mock.push_ok(json!(null)); // receipt pending
    mock.push_ok(json!({ "status": "0x1" })); // mined

    let client = AuctionClient::new(mock, Address::repeat_byte(0x42))
        .with_confirm_policy(emberbid_sdk::ConfirmPolicy {
            interval: std::time::Duration::from_millis(1),
            max_attempts: 5,
        });

    let signals: Vec<String> = (1..=6).map(|n| n.to_string()).collect();
    let tx = client.submit_bid(&proof(), &signals, "5000").await.unwrap();
    assert_eq!(tx, TX_HASH.parse::<B256>().unwrap());

    let calls = client.provider().calls();
    let methods: Vec<&str> = calls.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(
        methods,
        [
            "eth_accounts",
            "eth_sendTransaction",
            "eth_getTransactionReceipt",
            "eth_getTransactionReceipt",
        ]
    );

    // the envelope carries the fixed gas ceiling
    let tx_obj = &calls[1].1[0];
    assert_eq!(tx_obj["gas"], "0x7a120");
}

#[tokio::test]
async fn register_flow_end_to_end() {
    let mock = MockProvider::new();
    mock.push_ok(json!([ACCOUNT]));
    mock.push_ok(json!("0x")); // simulation passes
    mock.push_ok(json!(TX_HASH));
    mock.push_ok(json!({ "status": "0x1" }));

    let client = AuctionClient::new(mock, Address::repeat_byte(0x42));
    let tx = client.register(&verifier_params(), false).await.unwrap();
    assert_eq!(tx, TX_HASH.parse::<B256>().unwrap());

    // empty scope was replaced by the fallback literal in the calldata
    let calls = client.provider().calls();
    let send = calls
        .iter()
        .find(|(m, _)| m == "eth_sendTransaction")
        .unwrap();
    let data = send.1[0]["data"].as_str().unwrap();
    assert!(data.contains(&hex::encode("my-scope")));
}

#[tokio::test]
async fn reverted_bid_surfaces_reason() {
    let mock = MockProvider::new();
    mock.push_ok(json!([ACCOUNT]));
    mock.push_ok(json!(TX_HASH));
    mock.push_ok(json!({ "status": "0x0" }));
    // reason recovery: tx lookup, then replay reverts with Error(string)
    mock.push_ok(json!({
        "from": ACCOUNT,
        "to": "0x4242424242424242424242424242424242424242",
        "value": "0x0",
        "gas": "0x7a120",
        "input": "0x00",
    }));
    let mut revert_data = vec![0x08, 0xc3, 0x79, 0xa0];
    let mut offset = [0u8; 32];
    offset[31] = 0x20;
    revert_data.extend_from_slice(&offset);
    let message = b"bidding closed";
    let mut len = [0u8; 32];
    len[24..].copy_from_slice(&(message.len() as u64).to_be_bytes());
    revert_data.extend_from_slice(&len);
    let mut payload = message.to_vec();
    payload.resize(32, 0);
    revert_data.extend_from_slice(&payload);
    mock.push_err(emberbid_sdk::ProviderError::Rpc {
        method: "eth_call".into(),
        code: 3,
        message: "execution reverted".into(),
        data: Some(format!("0x{}", hex::encode(revert_data))),
    });

    let client = AuctionClient::new(mock, Address::repeat_byte(0x42));
    let signals: Vec<String> = (1..=6).map(|n| n.to_string()).collect();
    let err = client
        .submit_bid(&proof(), &signals, "5000")
        .await
        .unwrap_err();
    match err {
        AuctionError::TransactionReverted { reason, .. } => {
            assert_eq!(reason.as_deref(), Some("bidding closed"));
        }
        other => panic!("expected TransactionReverted, got {other:?}"),
    }
}

// ── trait-level provider helpers ──

#[tokio::test]
async fn provider_helpers_parse_responses() {
    let mock = MockProvider::new();
    mock.push_ok(json!([ACCOUNT, "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"]));
    assert_eq!(mock.connected_account().await.unwrap().unwrap(), ACCOUNT);

    mock.push_ok(json!("0xaa36a7"));
    assert_eq!(mock.chain_id().await.unwrap(), 11_155_111);
    assert_eq!(
        emberbid_sdk::network_name(11_155_111),
        "Sepolia Testnet"
    );
}

#[tokio::test]
async fn skip_policy_never_simulates() {
    let mock = MockProvider::new();
    mock.push_ok(json!([ACCOUNT]));
    mock.push_ok(json!(TX_HASH));
    mock.push_ok(json!({ "status": "0x1" }));

    let client = AuctionClient::new(mock, Address::repeat_byte(0x42))
        .with_simulation_policy(SimulationPolicy::Skip);
    client.register(&verifier_params(), true).await.unwrap();

    assert!(client
        .provider()
        .calls()
        .iter()
        .all(|(m, _)| m != "eth_call"));
}
