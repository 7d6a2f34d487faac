//! BCV CLI
//!
//! Command-line interface for the BCV rate API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use bcv_client::BcvClient;
use bcv_types::{Amount, HealthStatus};

#[derive(Parser)]
#[command(name = "bcv")]
#[command(author, version, about = "BCV exchange rate CLI client", long_about = None)]
struct Cli {
    /// Base URL of the rate API
    #[arg(long, env = "BCV_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current USD rate in bolívares
    Rate,
    /// Convert US dollars to bolívares
    ToBs {
        /// Amount in US dollars
        usd: String,
    },
    /// Convert bolívares to US dollars
    ToUsd {
        /// Amount in bolívares
        bs: String,
    },
    /// Check API health
    Health,
}

fn parse_amount(s: &str) -> Result<f64> {
    let amount: Amount = s
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", s))?;
    Ok(amount.value())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = BcvClient::new(&cli.api_url);

    match cli.command {
        Commands::Rate => {
            let rate = client.rate().await?;
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }
        Commands::ToBs { usd } => {
            let usd = parse_amount(&usd)?;
            let resp = client.to_local(usd).await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
        Commands::ToUsd { bs } => {
            let bs = parse_amount(&bs)?;
            let resp = client.to_usd(bs).await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
        Commands::Health => {
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
            if health.status != HealthStatus::Healthy {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_to_bs() {
        let cli = Cli::try_parse_from(["bcv", "to-bs", "100"]).unwrap();
        assert!(matches!(cli.command, Commands::ToBs { ref usd } if usd == "100"));
        assert_eq!(cli.api_url, "http://localhost:8080");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
