use crate::analyzers::{CollectionRarityTable, ItemMetadata, TraitAssignment};
use serde::{Deserialize, Deserializer};
use serde_aux::prelude::*;

use std::collections::BTreeMap;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct Attribute {
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub trait_type: String,
    #[serde(default, deserialize_with = "deserialize_trait_value")]
    pub value: String,
}

/// String or number, with null read as an empty value.
fn deserialize_trait_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    struct TraitValue(#[serde(deserialize_with = "deserialize_string_from_number")] String);

    Ok(Option::<TraitValue>::deserialize(deserializer)?
        .map(|v| v.0)
        .unwrap_or_default())
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct AssetResponse {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub attributes: Vec<Attribute>,
}

impl AssetResponse {
    /// Unnamed tokens fall back to `#<token_id>`.
    pub fn into_metadata(self, token_id: &str) -> ItemMetadata {
        ItemMetadata {
            name: self.name.unwrap_or_else(|| format!("#{}", token_id)),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            attributes: self
                .attributes
                .into_iter()
                .map(|a| TraitAssignment {
                    trait_type: a.trait_type,
                    value: a.value,
                })
                .collect(),
        }
    }
}

/// `{ "stats": { trait_type: { value: rarity_percentage } } }`
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CollectionStatsResponse {
    pub stats: BTreeMap<String, BTreeMap<String, f64>>,
}

impl From<CollectionStatsResponse> for CollectionRarityTable {
    fn from(resp: CollectionStatsResponse) -> Self {
        resp.stats.into()
    }
}
