use anyhow::{Context, Result};
use clap::{App, Arg};
use nft_rarity::config::Config;
use nft_rarity::logging::init_logging;
use nft_rarity::opensea::OpenseaAPIClient;

#[tokio::main]
pub async fn main() {
    init_logging("info");

    if let Err(e) = run().await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let matches = App::new("fetch_stats")
        .about("Dumps a collection's trait rarity table")
        .arg(
            Arg::with_name("CONTRACT_ADDRESS")
                .help("Contract address of the collection")
                .required(true)
                .index(1),
        )
        .get_matches();

    let contract_address = matches.value_of("CONTRACT_ADDRESS").unwrap_or_default();

    let client = OpenseaAPIClient::new(Config::from_env()?)?;
    let table = client
        .get_collection_stats(contract_address)
        .await
        .context("Error fetching collection stats")?;

    println!("{}", serde_json::to_string_pretty(&table)?);

    Ok(())
}
