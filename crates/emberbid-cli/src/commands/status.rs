use alloy_primitives::Address;
use anyhow::Result;
use colored::Colorize;

use emberbid_sdk::client::network_name;
use emberbid_sdk::wallet::{load_or_default, wallet_path};
use emberbid_sdk::{RegistrationEvidence, WalletProvider};

use crate::output;

pub async fn run() -> Result<()> {
    let path = wallet_path()?;
    if !path.exists() {
        if output::is_json() {
            output::json_output(serde_json::json!({
                "configured": false,
                "network": null,
                "account": null,
                "registered": null,
            }));
        } else {
            output::label("config", &"not found".red().to_string());
            output::info("run `emberbid config set rpc_url http://...` to get started");
        }
        return Ok(());
    }

    let wallet = load_or_default()?;
    let configured = wallet.auction_contract != "PLACEHOLDER";

    let provider = emberbid_sdk::RpcProvider::new(&wallet.rpc_url);
    let network = match provider.chain_id().await {
        Ok(id) => Some(network_name(id)),
        Err(_) => None,
    };

    let account = match &wallet.account {
        Some(a) => Some(a.clone()),
        None => provider.connected_account().await.unwrap_or(None),
    };

    let registered = match (&account, configured) {
        (Some(account), true) => match account.parse::<Address>() {
            Ok(addr) => {
                let client = super::client_from_wallet(&wallet)?;
                match client.registration_status(addr).await {
                    Ok(evidence) => Some(evidence),
                    Err(_) => None,
                }
            }
            Err(_) => None,
        },
        _ => None,
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "configured": configured,
            "network": network,
            "account": account,
            "registered": registered.as_ref().map(RegistrationEvidence::is_registered),
        }));
        return Ok(());
    }

    output::label(
        "network",
        &network.unwrap_or_else(|| "unreachable".red().to_string()),
    );
    output::label("account", account.as_deref().unwrap_or("none connected"));
    output::label(
        "contract",
        if configured {
            wallet.auction_contract.as_str()
        } else {
            "not configured"
        },
    );
    match registered {
        Some(evidence) if evidence.is_registered() => {
            let detail = match evidence {
                RegistrationEvidence::Identifier(id) => format!("registered ({id})"),
                _ => "registered (view probe)".to_string(),
            };
            output::label("registration", &detail.green().to_string());
        }
        Some(_) => output::label("registration", &"not registered".yellow().to_string()),
        None => output::label("registration", "unknown"),
    }
    Ok(())
}
