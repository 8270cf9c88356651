use log::debug;
use serde::Serialize;
use serde_json::Value;

/// One recipe record as supplied by the page, plus its classified shape.
///
/// The raw document is kept so that fields can be searched for anywhere in
/// the tree; the shape carries the fields whose location depends on whether
/// the record is flat or wrapped in a linked-data `@graph`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMetadata {
    document: Value,
    shape: RecipeShape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeShape {
    /// Recipe fields directly on the root object
    Flat(FlatRecipe),
    /// Root object with an `@graph` array of typed nodes
    Graph(GraphRecipe),
    /// Root is not an object; only key search applies
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecipe {
    pub url: Option<String>,
    pub publisher_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphRecipe {
    /// Top-level `url`, which takes precedence over any graph node
    pub url: Option<String>,
    /// Top-level `publisher.name`, which takes precedence over any graph node
    pub publisher_name: Option<String>,
    pub nodes: Vec<GraphNode>,
}

/// A typed entity inside `@graph`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphNode {
    pub types: Vec<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl GraphNode {
    fn from_value(value: &Value) -> Self {
        let types = match value.get("@type") {
            Some(Value::String(t)) => vec![t.clone()],
            Some(Value::Array(ts)) => ts
                .iter()
                .filter_map(|t| t.as_str().map(String::from))
                .collect(),
            _ => Vec::new(),
        };

        GraphNode {
            types,
            id: non_empty_str(value.get("@id")),
            name: non_empty_str(value.get("name")),
        }
    }

    pub fn is_type(&self, wanted: &str) -> bool {
        self.types.iter().any(|t| t == wanted)
    }
}

impl RecipeMetadata {
    /// Classify a parsed JSON-LD document. Never fails: anything that is not
    /// an object becomes [`RecipeShape::Unsupported`].
    pub fn from_value(document: Value) -> Self {
        let shape = match &document {
            Value::Object(root) => {
                let url = non_empty_str(root.get("url"));
                let publisher_name =
                    non_empty_str(root.get("publisher").and_then(|p| p.get("name")));

                match root.get("@graph").and_then(Value::as_array) {
                    Some(graph) => {
                        debug!("RecipeMetadata: @graph with {} nodes", graph.len());
                        RecipeShape::Graph(GraphRecipe {
                            url,
                            publisher_name,
                            nodes: graph.iter().map(GraphNode::from_value).collect(),
                        })
                    }
                    None => {
                        debug!("RecipeMetadata: flat recipe object");
                        RecipeShape::Flat(FlatRecipe {
                            url,
                            publisher_name,
                            name: non_empty_str(root.get("name")),
                        })
                    }
                }
            }
            _ => {
                debug!("RecipeMetadata: root is not an object, shape unsupported");
                RecipeShape::Unsupported
            }
        };

        RecipeMetadata { document, shape }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn shape(&self) -> &RecipeShape {
        &self.shape
    }
}

impl From<Value> for RecipeMetadata {
    fn from(value: Value) -> Self {
        RecipeMetadata::from_value(value)
    }
}

/// Rating summary as published in `aggregateRating`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateRating {
    pub rating_value: Option<f64>,
    pub rating_count: Option<u64>,
}

/// Everything a recipe card needs, with absence made explicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCardFields {
    pub title: String,
    pub url: Option<String>,
    pub organization: Option<String>,
    pub thumbnail: Option<String>,
    /// Whether the record carried an `aggregateRating` object at all
    pub has_rating: bool,
    pub rating_value: Option<f64>,
    pub rating_count: Option<u64>,
    pub duration_label: String,
    pub ingredient_summary: String,
}

/// A string field, treating empty strings and non-strings as absent.
pub(crate) fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
