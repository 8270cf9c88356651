use crate::model::AggregateRating;
use serde_json::Value;

/// Read an `aggregateRating` object. Returns `None` when the value is not an
/// object; numeric fields that are missing or unparseable are `None`.
pub fn parse_aggregate_rating(value: Option<&Value>) -> Option<AggregateRating> {
    let rating = value?.as_object()?;

    Some(AggregateRating {
        rating_value: rating.get("ratingValue").and_then(number_f64),
        rating_count: rating
            .get("ratingCount")
            .or_else(|| rating.get("reviewCount"))
            .and_then(number_u64),
    })
}

/// Number of whole stars to show for a rating value, 0 through 5.
pub fn star_count(rating_value: f64) -> u8 {
    rating_value.round().clamp(0.0, 5.0) as u8
}

fn number_f64(value: &Value) -> Option<f64> {
    let number: Option<f64> = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    // "NaN" and "inf" parse as f64
    number.filter(|n| n.is_finite())
}

fn number_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_fields() {
        let rating = parse_aggregate_rating(Some(&json!({
            "@type": "AggregateRating",
            "ratingValue": "4.6",
            "ratingCount": "128"
        })));
        assert_eq!(
            rating,
            Some(AggregateRating {
                rating_value: Some(4.6),
                rating_count: Some(128),
            })
        );
    }

    #[test]
    fn test_numeric_fields() {
        let rating = parse_aggregate_rating(Some(&json!({
            "ratingValue": 5,
            "ratingCount": 3
        })))
        .unwrap();
        assert_eq!(rating.rating_value, Some(5.0));
        assert_eq!(rating.rating_count, Some(3));
    }

    #[test]
    fn test_review_count_fallback() {
        let rating = parse_aggregate_rating(Some(&json!({
            "ratingValue": "4",
            "reviewCount": "17"
        })))
        .unwrap();
        assert_eq!(rating.rating_count, Some(17));
    }

    #[test]
    fn test_unparseable_fields() {
        let rating = parse_aggregate_rating(Some(&json!({
            "ratingValue": "great",
            "ratingCount": "-1"
        })))
        .unwrap();
        assert_eq!(rating, AggregateRating::default());
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(parse_aggregate_rating(None), None);
        assert_eq!(parse_aggregate_rating(Some(&json!(null))), None);
        assert_eq!(parse_aggregate_rating(Some(&json!("4.5"))), None);
    }

    #[test]
    fn test_star_count() {
        assert_eq!(star_count(4.6), 5);
        assert_eq!(star_count(4.4), 4);
        assert_eq!(star_count(4.5), 5);
        assert_eq!(star_count(0.2), 0);
        assert_eq!(star_count(7.0), 5);
        assert_eq!(star_count(-3.0), 0);
    }
}
