use crate::analyzers::rarities::{get_rarest_trait, get_trait_rarities};
use crate::analyzers::{CollectionRarityTable, RarityResult, TraitRarity};
use std::fmt;

#[derive(Debug, serde::Serialize, Default, Clone, PartialEq)]
pub struct RarityProfile {
    pub name: String,
    pub image: String,
    pub rarity_score: f64,
    pub rank: u32,
    pub rarest_trait: Option<TraitRarity>,
    pub traits: Vec<TraitRarity>,
}

impl RarityProfile {
    /// Trait rarities are looked up again from `table`, the same table the
    /// result was scored against.
    pub fn make(result: &RarityResult, table: &CollectionRarityTable) -> Self {
        log::info!("Building rarity profile for {}", result.item_name);

        Self {
            name: result.item_name.clone(),
            image: result.metadata.image.clone(),
            rarity_score: result.score,
            rank: result.rank,
            rarest_trait: get_rarest_trait(result.metadata, table),
            traits: get_trait_rarities(result.metadata, table),
        }
    }
}

impl fmt::Display for RarityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NFT Name: {}", self.name)?;
        writeln!(f, "Rarity Score: {:.2}", self.rarity_score)?;
        writeln!(f, "Rank: {}", self.rank)?;
        writeln!(f, "Traits:")?;
        for t in &self.traits {
            writeln!(
                f,
                "- {}: {} (Rarity: {:.2}%)",
                t.trait_type,
                t.value,
                t.rarity.unwrap_or_default()
            )?;
        }
        Ok(())
    }
}
