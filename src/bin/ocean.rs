//! `ocean`: command-line front end for the Ocean SDK.
//!
//! ```bash
//! ocean --config conf/ocean.toml new-wallet
//! ocean issue --wif <WIF> --name OCE --supply 10000
//! ocean transfer --token <ID> --wif <WIF> --to <ADDR> --amount 50
//! ocean balance <ADDR>
//! ocean balances <ADDR> <ADDR> ... --concurrency 8
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use ocean_sdk::batch::{self, DEFAULT_CONCURRENCY};
use ocean_sdk::config::{load_config, OceanConfig};
use ocean_sdk::logging::{init_logging, LogLevel};
use ocean_sdk::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "ocean", version, about = "Ocean token-issuance service client")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Service base URL; overrides the config file.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level; overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new wallet (WIF + address).
    NewWallet,
    /// Issue a token owned by the key's address.
    Issue {
        #[arg(long)]
        wif: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        supply: Amount,
    },
    /// Transfer tokens, signed by the sender's key.
    Transfer {
        #[arg(long)]
        token: TokenId,
        #[arg(long)]
        wif: String,
        #[arg(long)]
        to: Address,
        #[arg(long)]
        amount: Amount,
    },
    /// Look up a token.
    Token { id: TokenId },
    /// Look up an address's holdings.
    Balance { address: Address },
    /// Look up many addresses concurrently.
    Balances {
        #[arg(required = true)]
        addresses: Vec<Address>,
        /// Maximum requests in flight.
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },
    /// Look up a transaction.
    Tx { id: TxId },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ocean: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => OceanConfig::default(),
    };
    if let Some(url) = &cli.base_url {
        config.base_url = Some(url.clone());
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    let _guard = match init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("ocean: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config, cli.command).await {
        Ok(output) => {
            match serde_json::to_string_pretty(&output) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    tracing::error!(error = %e, "Cannot render output");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &OceanConfig, command: Command) -> Result<serde_json::Value, SdkError> {
    let client = || OceanClient::from_config(config);

    let output = match command {
        Command::NewWallet => {
            let wallet = Wallet::generate();
            json!({
                "address": wallet.address(),
                "pubKey": wallet.public_key_hex(),
                "privKey": wallet.to_wif(),
            })
        }
        Command::Issue { wif, name, supply } => {
            let owner = Wallet::from_wif(&wif)?;
            let token_id = client()?.tokens().issue(&owner, &name, supply).await?;
            json!({ "tokenID": token_id, "owner": owner.address() })
        }
        Command::Transfer {
            token,
            wif,
            to,
            amount,
        } => {
            let from = Wallet::from_wif(&wif)?;
            let tx_id = client()?
                .transfers()
                .send(&token, &from, &to, amount)
                .await?;
            json!({ "txID": tx_id })
        }
        Command::Token { id } => serde_json::to_value(client()?.tokens().get(&id).await?)?,
        Command::Balance { address } => {
            serde_json::to_value(client()?.balances().get(&address).await?)?
        }
        Command::Balances {
            addresses,
            concurrency,
        } => {
            let outcomes = batch::query_balances(&client()?, addresses, concurrency).await;
            let rows: Vec<serde_json::Value> = outcomes
                .into_iter()
                .map(|o| match o.result {
                    Ok(balance) => json!({ "address": o.address, "holdings": balance.holdings }),
                    Err(e) => json!({ "address": o.address, "error": e.to_string() }),
                })
                .collect();
            serde_json::Value::Array(rows)
        }
        Command::Tx { id } => serde_json::to_value(client()?.transfers().get(&id).await?)?,
    };
    Ok(output)
}
