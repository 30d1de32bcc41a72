// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Client configuration persistence.
//!
//! Stores the RPC endpoint, auction contract address, and workflow
//! policy as JSON at `~/.emberbid/wallet.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::client::SimulationPolicy;

#[derive(Serialize, Deserialize, Clone)]
pub struct WalletData {
    pub rpc_url: String,
    pub auction_contract: String,
    /// Preferred sending account; the wallet's first account when unset.
    pub account: Option<String>,
    #[serde(default)]
    pub simulation: SimulationPolicy,
}

impl Default for WalletData {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            auction_contract: "PLACEHOLDER".to_string(),
            account: None,
            simulation: SimulationPolicy::default(),
        }
    }
}

pub fn wallet_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".emberbid").join("wallet.json"))
}

pub fn load_wallet() -> Result<WalletData> {
    let path = wallet_path()?;
    let data = fs::read_to_string(&path)
        .with_context(|| format!("cannot read wallet at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid wallet JSON")
}

/// Load the wallet, falling back to defaults when none exists yet.
pub fn load_or_default() -> Result<WalletData> {
    let path = wallet_path()?;
    if !path.exists() {
        return Ok(WalletData::default());
    }
    load_wallet()
}

pub fn save_wallet(wallet: &WalletData) -> Result<()> {
    let path = wallet_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(wallet)?;
    fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_path_resolves() {
        let path = wallet_path().unwrap();
        assert!(path.ends_with("wallet.json"));
    }

    #[test]
    fn default_wallet_is_unconfigured() {
        let wallet = WalletData::default();
        assert_eq!(wallet.auction_contract, "PLACEHOLDER");
        assert_eq!(wallet.simulation, SimulationPolicy::Block);
    }

    #[test]
    fn wallet_json_round_trips() {
        let wallet = WalletData {
            rpc_url: "http://localhost:8545".into(),
            auction_contract: "0x4242424242424242424242424242424242424242".into(),
            account: Some("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".into()),
            simulation: SimulationPolicy::Warn,
        };
        let json = serde_json::to_string(&wallet).unwrap();
        assert!(json.contains("\"warn\""));
        let back: WalletData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.auction_contract, wallet.auction_contract);
        assert_eq!(back.simulation, SimulationPolicy::Warn);
    }

    #[test]
    fn missing_simulation_field_defaults_to_block() {
        let json = r#"{"rpc_url": "http://localhost:8545", "auction_contract": "PLACEHOLDER", "account": null}"#;
        let wallet: WalletData = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.simulation, SimulationPolicy::Block);
    }
}
