use serde_json::Value;

/// Drop the quantity and unit from each line and join what is left with `", "`.
///
/// The first two space-separated tokens are assumed to be the quantity and
/// the unit (`"1 cup flour"` -> `"flour"`). Lines without that prefix lose
/// words (`"2 apples"` -> `""`); they are not special-cased.
pub fn summarize_ingredients<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| remove_quantity_and_unit(line.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn remove_quantity_and_unit(line: &str) -> &str {
    line.splitn(3, ' ').nth(2).unwrap_or("")
}

/// Ingredient lines from a `recipeIngredient` value: an array of strings
/// (other entries are skipped) or a single string.
pub fn ingredient_lines(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        Some(Value::String(line)) => vec![line.clone()],
        _ => Vec::new(),
    }
}
