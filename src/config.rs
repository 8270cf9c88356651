use crate::error::CardError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Card rendering and extraction settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CardConfig {
    /// Path template for the star rating icon; `{stars}` is replaced with 0-5
    #[serde(default = "default_star_icon_template")]
    pub star_icon_template: String,
    /// Text shown when a recipe has no usable rating
    #[serde(default = "default_no_reviews_label")]
    pub no_reviews_label: String,
    /// Containers nested deeper than this are skipped by key search
    #[serde(default = "default_max_search_depth")]
    pub max_search_depth: usize,
    /// Decode HTML entities (`&amp;`, `&#39;`) in titles, publishers and ingredients
    #[serde(default = "default_decode_entities")]
    pub decode_entities: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            star_icon_template: default_star_icon_template(),
            no_reviews_label: default_no_reviews_label(),
            max_search_depth: default_max_search_depth(),
            decode_entities: default_decode_entities(),
        }
    }
}

// Default value functions
fn default_star_icon_template() -> String {
    "assets/images/icons/{stars}-star.svg".to_string()
}

fn default_no_reviews_label() -> String {
    "No Reviews".to_string()
}

pub(crate) fn default_max_search_depth() -> usize {
    64
}

fn default_decode_entities() -> bool {
    true
}

impl CardConfig {
    /// Load configuration from `recipe-card.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CARD__ prefix
    /// 2. recipe-card.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CARD__NO_REVIEWS_LABEL
    pub fn load() -> Result<Self, CardError> {
        Ok(load_config(File::with_name("recipe-card").required(false))?)
    }

    /// Load configuration from an explicit file; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, CardError> {
        Ok(load_config(File::from(path).required(true))?)
    }

    /// Icon path for a star count, using `star_icon_template`.
    pub fn star_icon(&self, stars: u8) -> String {
        self.star_icon_template
            .replace("{stars}", &stars.to_string())
    }
}

fn load_config<S>(file: S) -> Result<CardConfig, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_CARD__MAX_SEARCH_DEPTH
        .add_source(
            Environment::with_prefix("RECIPE_CARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
