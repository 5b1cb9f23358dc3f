pub mod rarities;

use std::collections::BTreeMap;

/// Decoded metadata for a single token.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<TraitAssignment>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraitAssignment {
    pub trait_type: String,
    pub value: String,
}

impl TraitAssignment {
    pub fn new(trait_type: &str, value: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: value.to_string(),
        }
    }
}

/// Collection-wide rarity percentages, keyed by trait type then trait value.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CollectionRarityTable(BTreeMap<String, BTreeMap<String, f64>>);

impl CollectionRarityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, trait_type: &str, value: &str, rarity: f64) -> &mut Self {
        self.0
            .entry(trait_type.to_string())
            .or_default()
            .insert(value.to_string(), rarity);
        self
    }

    /// Percentage of the collection holding `value` for `trait_type`, if known.
    pub fn rarity(&self, trait_type: &str, value: &str) -> Option<f64> {
        self.0.get(trait_type)?.get(value).copied()
    }
}

impl From<BTreeMap<String, BTreeMap<String, f64>>> for CollectionRarityTable {
    fn from(stats: BTreeMap<String, BTreeMap<String, f64>>) -> Self {
        Self(stats)
    }
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct TraitRarity {
    pub trait_type: String,
    pub value: String,
    pub rarity: Option<f64>,
}

/// Outcome of scoring one token against a rarity table.
///
/// `rank` is always 1: only a single token is ever scored, so there is no
/// population to rank it against.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityResult<'a> {
    pub item_name: String,
    pub score: f64,
    pub rank: u32,
    pub metadata: &'a ItemMetadata,
}
