pub mod card;
pub mod config;
pub mod error;
pub mod extractors;
pub mod loader;
pub mod model;
pub mod normalize;

// Re-export commonly used types
pub use card::{CardImage, RatingBadge, RecipeCard};
pub use config::CardConfig;
pub use error::CardError;
pub use model::{
    AggregateRating, FlatRecipe, GraphNode, GraphRecipe, NormalizedCardFields, RecipeMetadata,
    RecipeShape,
};
pub use normalize::normalize;

/// Parse JSON-LD text and derive the card fields with default settings.
pub fn card_fields_from_json(json: &str) -> Result<NormalizedCardFields, CardError> {
    let metadata = loader::from_json_str(json)?;
    Ok(normalize(&metadata, &CardConfig::default()))
}

/// Parse JSON-LD text into a display-ready card.
pub fn card_from_json(json: &str, config: &CardConfig) -> Result<RecipeCard, CardError> {
    let metadata = loader::from_json_str(json)?;
    Ok(card_from_metadata(&metadata, config))
}

/// Find the recipe JSON-LD in an HTML page and build its card.
pub fn card_from_html(html: &str, config: &CardConfig) -> Result<RecipeCard, CardError> {
    let metadata = loader::from_html_str(html)?;
    Ok(card_from_metadata(&metadata, config))
}

pub fn card_from_metadata(metadata: &RecipeMetadata, config: &CardConfig) -> RecipeCard {
    RecipeCard::new(&normalize(metadata, config), config)
}
