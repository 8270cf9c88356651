use crate::model::{RecipeMetadata, RecipeShape};
use log::debug;

/// Canonical URL of the recipe page.
///
/// A top-level `url` wins. Otherwise the `@id` of the first `Article` node
/// in `@graph` is used; if that node has no `@id` the result is absent.
pub fn resolve_url(data: &RecipeMetadata) -> Option<String> {
    match data.shape() {
        RecipeShape::Flat(flat) => flat.url.clone(),
        RecipeShape::Graph(graph) => graph.url.clone().or_else(|| {
            let article = graph.nodes.iter().find(|node| node.is_type("Article"));
            debug!("resolve_url: Article node in @graph: {:?}", article);
            article.and_then(|node| node.id.clone())
        }),
        RecipeShape::Unsupported => None,
    }
}
