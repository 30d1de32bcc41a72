pub mod bid;
pub mod config;
pub mod register;
pub mod status;

use alloy_primitives::Address;
use anyhow::Result;

use emberbid_sdk::wallet::WalletData;
use emberbid_sdk::{AuctionClient, RpcProvider};

use crate::output;

/// Build a client from the stored configuration.
pub(crate) fn client_from_wallet(wallet: &WalletData) -> Result<AuctionClient<RpcProvider>> {
    if wallet.auction_contract == "PLACEHOLDER" {
        return Err(output::fail_with_hint(
            "auction contract not configured",
            "run `emberbid config set auction_contract 0x...` first",
        ));
    }
    let contract: Address = wallet.auction_contract.parse().map_err(|_| {
        output::fail_with_hint(
            &format!("invalid auction contract address: {}", wallet.auction_contract),
            "expected a 0x-prefixed 20-byte hex address",
        )
    })?;
    let provider = RpcProvider::new(&wallet.rpc_url);
    Ok(AuctionClient::new(provider, contract).with_simulation_policy(wallet.simulation))
}
