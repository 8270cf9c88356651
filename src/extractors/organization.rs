use crate::model::{RecipeMetadata, RecipeShape};
use log::debug;

/// Display name of the publishing organization.
///
/// Looks at `publisher.name` first, then at the `name` of the first
/// `Organization` node in `@graph`.
pub fn resolve_organization(data: &RecipeMetadata) -> Option<String> {
    match data.shape() {
        RecipeShape::Flat(flat) => flat.publisher_name.clone(),
        RecipeShape::Graph(graph) => graph.publisher_name.clone().or_else(|| {
            let organization = graph
                .nodes
                .iter()
                .find(|node| node.is_type("Organization"));
            debug!(
                "resolve_organization: Organization node in @graph: {:?}",
                organization
            );
            organization.and_then(|node| node.name.clone())
        }),
        RecipeShape::Unsupported => None,
    }
}
