use crate::config::CardConfig;
use crate::extractors::star_count;
use crate::model::NormalizedCardFields;
use serde::Serialize;
use std::fmt;

/// Display-ready recipe card: every label already formatted, no markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub image: Option<CardImage>,
    pub title: String,
    pub link: Option<String>,
    pub organization: Option<String>,
    pub rating: RatingBadge,
    pub time: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RatingBadge {
    #[serde(rename_all = "camelCase")]
    Rated {
        value: f64,
        stars: u8,
        star_icon: String,
        star_alt: String,
        /// `(count)`, absent when the record has no rating count
        count_label: Option<String>,
    },
    NoReviews { label: String },
}

impl RecipeCard {
    pub fn new(fields: &NormalizedCardFields, config: &CardConfig) -> Self {
        let rating = match fields.rating_value {
            Some(value) if fields.has_rating => {
                let stars = star_count(value);
                RatingBadge::Rated {
                    value,
                    stars,
                    star_icon: config.star_icon(stars),
                    star_alt: format!("{stars} stars"),
                    count_label: fields.rating_count.map(|count| format!("({count})")),
                }
            }
            _ => RatingBadge::NoReviews {
                label: config.no_reviews_label.clone(),
            },
        };

        RecipeCard {
            image: fields.thumbnail.as_ref().map(|src| CardImage {
                src: src.clone(),
                alt: fields.title.clone(),
            }),
            title: fields.title.clone(),
            link: fields.url.clone(),
            organization: fields.organization.clone(),
            rating,
            time: fields.duration_label.clone(),
            ingredients: fields.ingredient_summary.clone(),
        }
    }
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(link) = &self.link {
            writeln!(f, "  {link}")?;
        }
        if let Some(organization) = &self.organization {
            writeln!(f, "  {organization}")?;
        }
        match &self.rating {
            RatingBadge::Rated {
                value,
                stars,
                count_label,
                ..
            } => {
                let filled = "*".repeat(usize::from(*stars));
                let empty = "-".repeat(5 - usize::from(*stars));
                write!(f, "  {value} {filled}{empty}")?;
                match count_label {
                    Some(count) => writeln!(f, " {count}")?,
                    None => writeln!(f)?,
                }
            }
            RatingBadge::NoReviews { label } => writeln!(f, "  {label}")?,
        }
        if !self.time.is_empty() {
            writeln!(f, "  {}", self.time)?;
        }
        if !self.ingredients.is_empty() {
            writeln!(f, "  {}", self.ingredients)?;
        }
        if let Some(image) = &self.image {
            writeln!(f, "  image: {}", image.src)?;
        }
        Ok(())
    }
}
