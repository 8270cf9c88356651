use crate::error::CardError;
use crate::config::default_max_search_depth;
use crate::extractors::search_for_key_bounded;
use crate::model::RecipeMetadata;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a JSON-LD document into recipe metadata.
pub fn from_json_str(json: &str) -> Result<RecipeMetadata, CardError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(RecipeMetadata::from_value(value))
}

/// Pick the recipe metadata out of a page's `application/ld+json` scripts.
///
/// The first block that looks like a recipe wins; if none does, the first
/// block that parsed at all is used.
pub fn from_html_str(html: &str) -> Result<RecipeMetadata, CardError> {
    from_html_str_bounded(html, default_max_search_depth())
}

/// Same as [`from_html_str`], looking for `recipeIngredient` no deeper than
/// `max_depth` when deciding which block is the recipe.
pub fn from_html_str_bounded(html: &str, max_depth: usize) -> Result<RecipeMetadata, CardError> {
    let blocks = json_ld_blocks(html);
    debug!("from_html_str: {} parseable JSON-LD blocks", blocks.len());

    let index = blocks
        .iter()
        .position(|block| looks_like_recipe(block, max_depth))
        .unwrap_or(0);
    blocks
        .into_iter()
        .nth(index)
        .map(RecipeMetadata::from_value)
        .ok_or(CardError::NoJsonLd)
}

/// Load a local `.json`/`.jsonld` or `.html`/`.htm` file.
///
/// Files with other extensions are treated as HTML when their first
/// non-blank character is `<`.
pub fn from_path(path: &Path) -> Result<RecipeMetadata, CardError> {
    from_path_bounded(path, default_max_search_depth())
}

pub fn from_path_bounded(path: &Path, max_depth: usize) -> Result<RecipeMetadata, CardError> {
    let content = fs::read_to_string(path)?;
    let is_html = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => true,
        Some(ext) if ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("jsonld") => {
            false
        }
        _ => looks_like_html(&content),
    };
    debug!("from_path: {} (html: {})", path.display(), is_html);

    from_content(&content, is_html, max_depth)
}

/// Load from text whose format is not known in advance.
pub fn from_unknown_str(content: &str) -> Result<RecipeMetadata, CardError> {
    from_unknown_str_bounded(content, default_max_search_depth())
}

pub fn from_unknown_str_bounded(
    content: &str,
    max_depth: usize,
) -> Result<RecipeMetadata, CardError> {
    from_content(content, looks_like_html(content), max_depth)
}

fn from_content(
    content: &str,
    is_html: bool,
    max_depth: usize,
) -> Result<RecipeMetadata, CardError> {
    if is_html {
        from_html_str_bounded(content, max_depth)
    } else {
        from_json_str(content)
    }
}

fn looks_like_html(content: &str) -> bool {
    content.trim_start().starts_with('<')
}

fn json_ld_blocks(html: &str) -> Vec<Value> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("script[type='application/ld+json']") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .enumerate()
        .filter_map(|(index, script)| {
            let raw_json = script.inner_html();
            match serde_json::from_str::<Value>(raw_json.trim()) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!("json_ld_blocks: failed to parse block {}: {}", index, e);
                    None
                }
            }
        })
        .collect()
}

fn looks_like_recipe(value: &Value, max_depth: usize) -> bool {
    if search_for_key_bounded(value, "recipeIngredient", max_depth).is_some() {
        return true;
    }
    let nodes = match value.get("@graph").and_then(Value::as_array) {
        Some(graph) => graph.iter().collect::<Vec<_>>(),
        None => vec![value],
    };
    nodes.iter().any(|node| is_recipe_type(node))
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}
