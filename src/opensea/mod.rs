use self::types::*;
use crate::analyzers::{CollectionRarityTable, ItemMetadata};
use crate::config::Config;

use backoff::future::retry;
use backoff::ExponentialBackoff;
use derive_more::Display;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

pub mod types;

static ASSET_PATH: &str = "/v1/asset/";

#[derive(Debug, Display)]
pub enum FetchError {
    #[display(fmt = "HTTP request failed: {}", _0)]
    Transport(reqwest::Error),

    #[display(fmt = "unexpected response status {}: {}", status, body)]
    Status { status: u16, body: String },

    #[display(fmt = "failed to parse JSON response: {}", _0)]
    Decode(serde_json::Error),
}

// The message already carries the inner error, so no source is exposed.
impl std::error::Error for FetchError {}

pub struct OpenseaAPIClient {
    client: reqwest::Client,
    config: Config,
}

impl OpenseaAPIClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { client, config })
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R, FetchError> {
        let url = self.config.api_base.trim_end_matches('/').to_string() + path;
        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(self.config.retry_max_elapsed),
            ..Default::default()
        };

        let resp = retry(backoff, || async {
            let mut reqw = self.client.get(&url).header(ACCEPT, "application/json");
            if let Some(key) = &self.config.api_key {
                reqw = reqw.header("x-api-key", key);
            }
            log::debug!("GET {}", url);
            reqw.send().await.map_err(|e| {
                log::warn!("Request to {} failed: {}", url, e);
                // a malformed URL or header fails the same way every time
                if e.is_builder() {
                    backoff::Error::permanent(e)
                } else {
                    backoff::Error::transient(e)
                }
            })
        })
        .await
        .map_err(FetchError::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(FetchError::Transport)?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }

    pub async fn get_asset_metadata(
        &self,
        contract_address: &str,
        token_id: &str,
    ) -> Result<ItemMetadata, FetchError> {
        log::info!("Getting asset {}/{}", contract_address, token_id);
        let path = format!("{}{}/{}/", ASSET_PATH, contract_address, token_id);
        let asset: AssetResponse = self.fetch(&path).await?;
        Ok(asset.into_metadata(token_id))
    }

    pub async fn get_collection_stats(
        &self,
        contract_address: &str,
    ) -> Result<CollectionRarityTable, FetchError> {
        log::info!("Getting collection stats for {}", contract_address);
        let path = format!("{}{}/stats/", ASSET_PATH, contract_address);
        let stats: CollectionStatsResponse = self.fetch(&path).await?;
        Ok(stats.into())
    }
}
