use super::search_for_key_bounded;
use crate::model::{non_empty_str, RecipeMetadata, RecipeShape};

/// Card title: `headline` anywhere in the record, else the recipe's own `name`.
pub fn resolve_title(data: &RecipeMetadata, max_depth: usize) -> Option<String> {
    non_empty_str(search_for_key_bounded(data.document(), "headline", max_depth))
        .or_else(|| match data.shape() {
            RecipeShape::Flat(flat) => flat.name.clone(),
            RecipeShape::Graph(graph) => graph
                .nodes
                .iter()
                .find(|node| node.is_type("Recipe"))
                .and_then(|node| node.name.clone()),
            RecipeShape::Unsupported => None,
        })
}
