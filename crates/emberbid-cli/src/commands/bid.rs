use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use emberbid_sdk::client::{explorer_tx_url, network_name};
use emberbid_sdk::wallet::load_or_default;
use emberbid_sdk::WalletProvider;
use emberbid_types::Groth16Proof;

use crate::output;

pub async fn run(proof_file: &Path, signals_file: &Path, amount: &str) -> Result<()> {
    let wallet = load_or_default()?;
    let client = super::client_from_wallet(&wallet)?;

    let proof_raw = fs::read_to_string(proof_file)
        .with_context(|| format!("cannot read {}", proof_file.display()))?;
    let proof = Groth16Proof::from_json(&proof_raw).context("invalid proof JSON")?;

    let signals_raw = fs::read_to_string(signals_file)
        .with_context(|| format!("cannot read {}", signals_file.display()))?;
    let signals: Vec<String> =
        serde_json::from_str(&signals_raw).context("invalid public signals JSON")?;

    let pb = output::spinner("submitting sealed bid (confirm in your wallet)...");
    let result = client.submit_bid(&proof, &signals, amount).await;
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
            "amount": amount,
            "explorer": explorer,
        }));
    } else {
        output::success("bid confirmed");
        output::label("tx", &tx_hash.to_string());
        output::label("amount", amount);
        output::label("explorer", &explorer);
    }
    Ok(())
}
