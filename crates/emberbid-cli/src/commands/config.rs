use anyhow::Result;

use emberbid_sdk::wallet::{load_or_default, save_wallet};
use emberbid_sdk::SimulationPolicy;

use crate::output;

const ALLOWED_KEYS: &[&str] = &["rpc_url", "auction_contract", "account", "simulation"];

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut wallet = load_or_default()?;
    match key {
        "rpc_url" => wallet.rpc_url = value.to_string(),
        "auction_contract" => wallet.auction_contract = value.to_string(),
        "account" => wallet.account = Some(value.to_string()),
        "simulation" => {
            wallet.simulation = match value {
                "block" => SimulationPolicy::Block,
                "warn" => SimulationPolicy::Warn,
                "skip" => SimulationPolicy::Skip,
                other => {
                    return Err(output::fail_with_hint(
                        &format!("unknown simulation policy: {other}"),
                        "use one of: block, warn, skip",
                    ))
                }
            }
        }
        _ => unreachable!(),
    }
    save_wallet(&wallet)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let wallet = load_or_default()?;
    let simulation = serde_json::to_value(wallet.simulation)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "rpc_url": wallet.rpc_url,
            "auction_contract": wallet.auction_contract,
            "account": wallet.account,
            "simulation": simulation,
        }));
    } else {
        output::label("rpc_url", &wallet.rpc_url);
        output::label("auction_contract", &wallet.auction_contract);
        output::label("account", wallet.account.as_deref().unwrap_or("(wallet default)"));
        output::label("simulation", simulation.as_str().unwrap_or("block"));
    }
    Ok(())
}
