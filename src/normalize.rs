use crate::config::CardConfig;
use crate::extractors::{
    format_duration, ingredient_lines, parse_aggregate_rating, resolve_organization,
    resolve_thumbnail, resolve_title, resolve_url, search_for_key_bounded, summarize_ingredients,
};
use crate::model::{NormalizedCardFields, RecipeMetadata};
use html_escape::decode_html_entities;
use log::debug;
use serde_json::Value;

/// Derive every card field from one recipe record.
///
/// Each call recomputes from scratch; nothing is cached between calls.
pub fn normalize(data: &RecipeMetadata, config: &CardConfig) -> NormalizedCardFields {
    let depth = config.max_search_depth;
    let document = data.document();
    let decode = |text: String| {
        if config.decode_entities {
            decode_html_symbols(&text)
        } else {
            text
        }
    };

    let rating = parse_aggregate_rating(search_for_key_bounded(document, "aggregateRating", depth));
    debug!("normalize: aggregateRating {:?}", rating);

    let duration_label = search_for_key_bounded(document, "totalTime", depth)
        .and_then(Value::as_str)
        .map(format_duration)
        .unwrap_or_default();

    let lines: Vec<String> =
        ingredient_lines(search_for_key_bounded(document, "recipeIngredient", depth))
            .into_iter()
            .map(decode)
            .collect();
    debug!("normalize: {} ingredient lines", lines.len());

    NormalizedCardFields {
        title: resolve_title(data, depth).map(decode).unwrap_or_default(),
        url: resolve_url(data),
        organization: resolve_organization(data).map(decode),
        thumbnail: resolve_thumbnail(document, depth),
        has_rating: rating.is_some(),
        rating_value: rating.and_then(|r| r.rating_value),
        rating_count: rating.and_then(|r| r.rating_count),
        duration_label,
        ingredient_summary: summarize_ingredients(&lines),
    }
}

fn decode_html_symbols(text: &str) -> String {
    // Some sites double-encode entities (&amp;amp;)
    decode_html_entities(&decode_html_entities(text)).into_owned()
}
