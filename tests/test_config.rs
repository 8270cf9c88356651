use recipe_card::{card_from_json, CardConfig, CardError, RatingBadge};
use std::env;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_file_and_environment_overrides() {
    let file = config_file(
        r#"
star_icon_template = "/static/stars/{stars}.png"
max_search_depth = 8
no_reviews_label = "From file"
"#,
    );
    env::set_var("RECIPE_CARD__NO_REVIEWS_LABEL", "Not rated yet");

    let config = CardConfig::load_from(file.path()).unwrap();
    env::remove_var("RECIPE_CARD__NO_REVIEWS_LABEL");

    assert_eq!(config.star_icon_template, "/static/stars/{stars}.png");
    assert_eq!(config.max_search_depth, 8);
    assert_eq!(config.no_reviews_label, "Not rated yet");
    assert!(config.decode_entities);

    let rated = card_from_json(r#"{"aggregateRating": {"ratingValue": "2.4"}}"#, &config).unwrap();
    assert!(matches!(
        rated.rating,
        RatingBadge::Rated { ref star_icon, count_label: None, .. } if star_icon == "/static/stars/2.png"
    ));

    let unrated = card_from_json("{}", &config).unwrap();
    assert_eq!(
        unrated.rating,
        RatingBadge::NoReviews {
            label: "Not rated yet".to_string()
        }
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = CardConfig::load_from(std::path::Path::new("/definitely/not/recipe-card.toml"));
    assert!(matches!(result, Err(CardError::Config(_))));
}

#[test]
fn test_invalid_value_is_an_error() {
    let file = config_file("max_search_depth = \"very deep\"\n");
    assert!(matches!(
        CardConfig::load_from(file.path()),
        Err(CardError::Config(_))
    ));
}
