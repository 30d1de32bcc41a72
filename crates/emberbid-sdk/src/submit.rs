// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Transaction envelope construction and submission.

use alloy_primitives::{Address, B256, U256};
use serde_json::json;
use tracing::debug;

use crate::error::{AuctionError, AuctionResult};
use crate::provider::WalletProvider;

/// Fixed gas ceiling for every submission. The verification call path is
/// computation-heavy; undersupplying gas surfaces as an opaque
/// out-of-gas revert instead of a usable error.
pub const GAS_LIMIT: u64 = 500_000;

/// Submit a transaction through the wallet, returning its hash.
///
/// Requires at least one connected account. The wallet may hold the
/// request indefinitely waiting for user approval; a rejection surfaces
/// as [`AuctionError::UserRejected`].
pub async fn send_transaction<P: WalletProvider + ?Sized>(
    provider: &P,
    to: Address,
    value: U256,
    data: &[u8],
) -> AuctionResult<B256> {
    let from = provider
        .connected_account()
        .await
        .map_err(AuctionError::from)?
        .ok_or(AuctionError::NoWalletConnected)?;

    let gas = format!("0x{GAS_LIMIT:x}");
    let tx = json!({
        "from": from,
        "to": to.to_string(),
        "value": format!("0x{value:x}"),
        "data": format!("0x{}", hex::encode(data)),
        "gas": gas,
        // some wallets read the alternative key
        "gasLimit": gas,
    });

    debug!(to = %to, data_len = data.len(), "submitting transaction");

    let result = provider
        .request("eth_sendTransaction", json!([tx]))
        .await
        .map_err(AuctionError::from)?;

    let hash = result
        .as_str()
        .ok_or_else(|| AuctionError::Network("eth_sendTransaction: expected hash string".into()))?;
    hash.parse::<B256>()
        .map_err(|e| AuctionError::Network(format!("eth_sendTransaction returned malformed hash: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;
    use crate::provider::ProviderError;
    use serde_json::json;

    const HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

    #[tokio::test]
    async fn no_accounts_is_no_wallet_connected() {
        let mock = MockProvider::new();
        mock.push_ok(json!([]));
        let err = send_transaction(&mock, Address::ZERO, U256::ZERO, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AuctionError::NoWalletConnected));
        // only eth_accounts went out
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn builds_envelope_with_gas_ceiling() {
        let mock = MockProvider::new();
        mock.push_ok(json!(["0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"]));
        mock.push_ok(json!(HASH));

        let hash = send_transaction(&mock, Address::repeat_byte(2), U256::ZERO, &[0xab])
            .await
            .unwrap();
        assert_eq!(hash, HASH.parse::<B256>().unwrap());

        let calls = mock.calls();
        assert_eq!(calls[1].0, "eth_sendTransaction");
        let tx = &calls[1].1[0];
        assert_eq!(tx["gas"], "0x7a120");
        assert_eq!(tx["gasLimit"], "0x7a120");
        assert_eq!(tx["value"], "0x0");
        assert_eq!(tx["data"], "0xab");
        assert_eq!(tx["from"], "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    }

    #[tokio::test]
    async fn wallet_rejection_is_distinct() {
        let mock = MockProvider::new();
        mock.push_ok(json!(["0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"]));
        mock.push_err(ProviderError::UserRejected);
        let err = send_transaction(&mock, Address::ZERO, U256::ZERO, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AuctionError::UserRejected));
    }
}
