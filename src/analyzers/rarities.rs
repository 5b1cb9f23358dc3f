use super::{CollectionRarityTable, ItemMetadata, RarityResult, TraitRarity};

/// Sums the rarity percentage of every trait on the token, in attribute order.
///
/// Traits missing from `table` contribute 0.0, so an unknown trait is
/// indistinguishable from one held by 0% of the collection.
pub fn score<'a>(metadata: &'a ItemMetadata, table: &CollectionRarityTable) -> RarityResult<'a> {
    let score = metadata.attributes.iter().fold(0f64, |acc, t| {
        acc + table.rarity(&t.trait_type, &t.value).unwrap_or_default()
    });

    RarityResult {
        item_name: metadata.name.clone(),
        score,
        rank: 1,
        metadata,
    }
}

pub fn get_trait_rarities(
    metadata: &ItemMetadata,
    table: &CollectionRarityTable,
) -> Vec<TraitRarity> {
    metadata
        .attributes
        .iter()
        .map(|t| TraitRarity {
            trait_type: t.trait_type.clone(),
            value: t.value.clone(),
            rarity: table.rarity(&t.trait_type, &t.value),
        })
        .collect()
}

/// Trait with the lowest known rarity percentage. Earlier attributes win ties.
pub fn get_rarest_trait(
    metadata: &ItemMetadata,
    table: &CollectionRarityTable,
) -> Option<TraitRarity> {
    get_trait_rarities(metadata, table)
        .into_iter()
        .filter(|t| t.rarity.is_some())
        .fold(None, |rarest: Option<TraitRarity>, t| match rarest {
            Some(r) if r.rarity <= t.rarity => Some(r),
            _ => Some(t),
        })
}
