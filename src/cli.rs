use crate::analyzers::rarities::score;
use crate::config::Config;
use crate::opensea::OpenseaAPIClient;
use crate::profiles::rarity_profile::RarityProfile;
use anyhow::{Context, Result};
use clap::{App, Arg};
use std::ffi::OsString;
use std::io::Write;

fn app() -> App<'static, 'static> {
    App::new("nft-rarity")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scores an NFT against its collection's trait rarity stats")
        .arg(
            Arg::with_name("json")
                .short("j")
                .long("json")
                .help("Prints the rarity profile as JSON"),
        )
        .arg(
            Arg::with_name("CONTRACT_ADDRESS")
                .help("Contract address of the collection")
                .index(1),
        )
        .arg(
            Arg::with_name("TOKEN_ID")
                .help("Token id within the collection")
                .index(2),
        )
}

/// Parses `args`, fetches the token and its collection stats, and writes the
/// report to `out`. Prints usage and returns `Ok` when an argument is missing;
/// `load_config` is only called once both are present.
pub async fn run<I, T, W>(
    args: I,
    load_config: impl FnOnce() -> Result<Config>,
    out: &mut W,
) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let matches = app().get_matches_from(args);

    let (contract_address, token_id) = match (
        matches.value_of("CONTRACT_ADDRESS"),
        matches.value_of("TOKEN_ID"),
    ) {
        (Some(c), Some(t)) => (c, t),
        _ => {
            writeln!(out, "{}", matches.usage())?;
            return Ok(());
        }
    };

    let config = load_config().context("Invalid configuration")?;
    let client = OpenseaAPIClient::new(config)?;

    let metadata = client
        .get_asset_metadata(contract_address, token_id)
        .await
        .context("Error fetching NFT metadata")?;

    let table = client
        .get_collection_stats(contract_address)
        .await
        .context("Error fetching collection stats")?;

    let result = score(&metadata, &table);
    let profile = RarityProfile::make(&result, &table);

    if matches.is_present("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?;
    } else {
        write!(out, "{}", profile)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    static CONTRACT: &str = "0xabc";

    fn server_config(server: &MockServer) -> impl FnOnce() -> Result<Config> {
        let api_base = server.uri();
        move || {
            Ok(Config {
                api_base,
                api_key: None,
                timeout: Duration::from_secs(5),
                retry_max_elapsed: Duration::ZERO,
            })
        }
    }

    async fn mount_asset(server: &MockServer, status: u16, expected: u64) {
        let template = if status == 200 {
            ResponseTemplate::new(200).set_body_json(json!({
                "name": "Wizard #7",
                "attributes": [
                    {"trait_type": "Background", "value": "Blue"},
                    {"trait_type": "Hat", "value": "Crown"}
                ]
            }))
        } else {
            ResponseTemplate::new(status).set_body_string("not found")
        };
        Mock::given(method("GET"))
            .and(path(format!("/v1/asset/{}/7/", CONTRACT)))
            .respond_with(template)
            .expect(expected)
            .mount(server)
            .await;
    }

    async fn mount_stats(server: &MockServer, expected: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/asset/{}/stats/", CONTRACT)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stats": {"Background": {"Blue": 12.5}}
            })))
            .expect(expected)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_no_args_prints_usage() {
        let mut out = Vec::new();

        run(
            vec!["nft-rarity"],
            || Err(anyhow!("config loaded without arguments")),
            &mut out,
        )
        .await
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("USAGE"));
        assert!(out.contains("nft-rarity"));
    }

    #[tokio::test]
    async fn test_one_arg_prints_usage_without_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let mut out = Vec::new();

        run(vec!["nft-rarity", CONTRACT], server_config(&server), &mut out)
            .await
            .unwrap();

        assert!(String::from_utf8(out).unwrap().contains("USAGE"));
    }

    #[tokio::test]
    async fn test_metadata_failure_skips_stats() {
        let server = MockServer::start().await;
        mount_asset(&server, 404, 1).await;
        mount_stats(&server, 0).await;
        let mut out = Vec::new();

        let err = run(
            vec!["nft-rarity", CONTRACT, "7"],
            server_config(&server),
            &mut out,
        )
        .await
        .unwrap_err();

        assert_eq!(
            format!("{:#}", err),
            "Error fetching NFT metadata: unexpected response status 404: not found"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_text_report() {
        let server = MockServer::start().await;
        mount_asset(&server, 200, 1).await;
        mount_stats(&server, 1).await;
        let mut out = Vec::new();

        run(
            vec!["nft-rarity", CONTRACT, "7"],
            server_config(&server),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NFT Name: Wizard #7\n\
             Rarity Score: 12.50\n\
             Rank: 1\n\
             Traits:\n\
             - Background: Blue (Rarity: 12.50%)\n\
             - Hat: Crown (Rarity: 0.00%)\n"
        );
    }

    #[tokio::test]
    async fn test_json_report() {
        let server = MockServer::start().await;
        mount_asset(&server, 200, 1).await;
        mount_stats(&server, 1).await;
        let mut out = Vec::new();

        run(
            vec!["nft-rarity", "--json", CONTRACT, "7"],
            server_config(&server),
            &mut out,
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "Wizard #7");
        assert_eq!(value["rarity_score"], 12.5);
        assert!(value["traits"][1]["rarity"].is_null());
    }
}
