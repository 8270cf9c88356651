//! Pure field extractors over recipe metadata.
//!
//! None of these fail: a field that cannot be found comes back as `None`
//! (or an empty string for labels).

mod duration;
mod ingredients;
mod key_search;
mod organization;
mod rating;
mod thumbnail;
mod title;
mod url;

pub use duration::format_duration;
pub use ingredients::{ingredient_lines, summarize_ingredients};
pub use key_search::{search_for_key, search_for_key_bounded};
pub use organization::resolve_organization;
pub use rating::{parse_aggregate_rating, star_count};
pub use thumbnail::resolve_thumbnail;
pub use title::resolve_title;
pub use url::resolve_url;
