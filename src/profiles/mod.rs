pub mod rarity_profile;
