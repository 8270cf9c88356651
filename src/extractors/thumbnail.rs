use super::search_for_key_bounded;
use serde_json::Value;

/// Thumbnail image for the card.
///
/// Prefers `thumbnailUrl`, falling back to schema.org `image`. Cropped
/// variants of JPEG images are mapped back to the full image by cutting the
/// URL after the first `.jpg`.
pub fn resolve_thumbnail(document: &Value, max_depth: usize) -> Option<String> {
    search_for_key_bounded(document, "thumbnailUrl", max_depth)
        .and_then(first_url)
        .or_else(|| search_for_key_bounded(document, "image", max_depth).and_then(first_url))
        .map(|url| full_size_jpg(&url))
}

fn first_url(value: &Value) -> Option<String> {
    match value {
        Value::String(url) if !url.is_empty() => Some(url.clone()),
        Value::Array(items) => items.iter().find_map(first_url),
        Value::Object(image) => image.get("url").and_then(first_url),
        _ => None,
    }
}

fn full_size_jpg(url: &str) -> String {
    match url.find(".jpg") {
        Some(pos) => url[..pos + ".jpg".len()].to_string(),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: Value) -> Option<String> {
        resolve_thumbnail(&value, 64)
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            resolve(json!({ "thumbnailUrl": "https://example.com/soup.jpg" })),
            Some("https://example.com/soup.jpg".to_string())
        );
    }

    #[test]
    fn test_cropped_jpg() {
        assert_eq!(
            resolve(json!({ "thumbnailUrl": "https://example.com/soup.jpg?w=300&h=200" })),
            Some("https://example.com/soup.jpg".to_string())
        );
        assert_eq!(
            resolve(json!({ "thumbnailUrl": "https://example.com/soup.jpg-300x200.jpg" })),
            Some("https://example.com/soup.jpg".to_string())
        );
    }

    #[test]
    fn test_other_formats_untouched() {
        assert_eq!(
            resolve(json!({ "thumbnailUrl": "https://example.com/soup.webp?w=300" })),
            Some("https://example.com/soup.webp?w=300".to_string())
        );
    }

    #[test]
    fn test_array_thumbnail() {
        assert_eq!(
            resolve(json!({ "thumbnailUrl": ["", "https://example.com/a.png"] })),
            Some("https://example.com/a.png".to_string())
        );
    }

    #[test]
    fn test_image_fallback() {
        assert_eq!(
            resolve(json!({ "image": { "@type": "ImageObject", "url": "https://example.com/b.png" } })),
            Some("https://example.com/b.png".to_string())
        );
        assert_eq!(
            resolve(json!({ "image": ["https://example.com/c.jpg", "https://example.com/d.jpg"] })),
            Some("https://example.com/c.jpg".to_string())
        );
    }

    #[test]
    fn test_no_image() {
        assert_eq!(resolve(json!({ "headline": "Soup" })), None);
        assert_eq!(resolve(json!({ "thumbnailUrl": 7 })), None);
    }
}
