use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use emberbid_sdk::client::{explorer_tx_url, network_name};
use emberbid_sdk::wallet::load_or_default;
use emberbid_sdk::WalletProvider;
use emberbid_types::ProofVerificationParams;

use crate::output;

pub async fn run(params_file: &Path, id_card: bool) -> Result<()> {
    let wallet = load_or_default()?;
    let client = super::client_from_wallet(&wallet)?;

    let raw = fs::read_to_string(params_file)
        .with_context(|| format!("cannot read {}", params_file.display()))?;
    let params: ProofVerificationParams =
        serde_json::from_str(&raw).context("invalid verifier parameters JSON")?;

    let pb = output::spinner("registering on-chain (confirm in your wallet)...");
    let result = client.register(&params, id_card).await;
    pb.finish_and_clear();
    let tx_hash = result?;

    let network = match client.provider().chain_id().await {
        Ok(id) => network_name(id),
        Err(_) => String::new(),
    };
    let explorer = explorer_tx_url(&network, tx_hash);

    if output::is_json() {
        output::json_output(serde_json::json!({
            "tx_hash": tx_hash.to_string(),
            "network": network,
            "explorer": explorer,
        }));
    } else {
        output::success("registration confirmed");
        output::label("tx", &tx_hash.to_string());
        if !network.is_empty() {
            output::label("network", &network);
        }
        output::label("explorer", &explorer);
    }
    Ok(())
}
