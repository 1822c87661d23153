//! Products CLI
//!
//! Command-line interface for the Products API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use products_client::ProductsClient;

#[derive(Parser)]
#[command(name = "products")]
#[command(author, version, about = "Products API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Products API
    #[arg(
        long,
        env = "PRODUCTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List a page of products
    List {
        /// Index of the first product (server default 0)
        #[arg(long, allow_hyphen_values = true)]
        page_start: Option<i32>,
        /// Number of products to return (server default 5)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<i32>,
        /// Currency to price the products in (server default GBP)
        #[arg(long)]
        currency: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ProductsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::List {
            page_start,
            page_size,
            currency,
        } => {
            match client
                .list_products(page_start, page_size, currency.as_deref())
                .await?
            {
                Some(results) => println!("{}", serde_json::to_string_pretty(&results)?),
                None => println!("No products on this page"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_args() {
        let cli = Cli::try_parse_from([
            "products",
            "--api-url",
            "http://example:8080",
            "list",
            "--page-start",
            "1",
            "--page-size",
            "3",
            "--currency",
            "EUR",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://example:8080");
        match cli.command {
            Commands::List {
                page_start,
                page_size,
                currency,
            } => {
                assert_eq!(page_start, Some(1));
                assert_eq!(page_size, Some(3));
                assert_eq!(currency.as_deref(), Some("EUR"));
            }
            Commands::Health => panic!("expected list"),
        }
    }

    #[test]
    fn test_list_defaults_to_server_values() {
        let cli = Cli::try_parse_from(["products", "list"]).unwrap();
        match cli.command {
            Commands::List {
                page_start,
                page_size,
                currency,
            } => {
                assert!(page_start.is_none());
                assert!(page_size.is_none());
                assert!(currency.is_none());
            }
            Commands::Health => panic!("expected list"),
        }
    }
}
