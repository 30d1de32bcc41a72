mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emberbid", about = "Sealed-bid auction client")]
struct Cli {
    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Show or update client configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCmd>,
    },
    /// Register for the auction with verifier parameters from the identity app
    Register {
        /// JSON file holding the SDK's solidity verifier parameters
        params_file: PathBuf,
        /// The proof was generated from an ID card rather than a passport
        #[arg(long)]
        id_card: bool,
    },
    /// Submit a sealed bid backed by a Groth16 proof
    Bid {
        /// Prover output (proof.json)
        proof_file: PathBuf,
        /// Public signals (public.json)
        signals_file: PathBuf,
        /// Bid amount, decimal or 0x-hex
        amount: String,
    },
    /// Show wallet, network, and registration status
    Status,
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print the current configuration
    Show,
    /// Update a configuration key
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    match cli.command {
        Cmd::Config { action } => match action {
            None | Some(ConfigCmd::Show) => commands::config::show()?,
            Some(ConfigCmd::Set { key, value }) => commands::config::set(&key, &value)?,
        },
        Cmd::Register {
            params_file,
            id_card,
        } => commands::register::run(&params_file, id_card).await?,
        Cmd::Bid {
            proof_file,
            signals_file,
            amount,
        } => commands::bid::run(&proof_file, &signals_file, &amount).await?,
        Cmd::Status => commands::status::run().await?,
    }
    Ok(())
}
