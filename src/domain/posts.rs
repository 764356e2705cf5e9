//! Post selection over a fetched collection.

pub use onbrand_api_types::{Post, PostStatus};
use url::Url;

use super::error::DomainError;

/// Pick the post addressed by `post_id`, or the first post when no id is given.
///
/// The id must be a plain decimal integer; anything else cannot match and is
/// reported as not found with the id exactly as requested.
pub fn select_post(posts: Vec<Post>, post_id: Option<&str>) -> Result<Post, DomainError> {
    match post_id {
        Some(raw) => {
            let wanted = parse_post_id(raw).ok_or_else(|| DomainError::post_not_found(raw))?;
            posts
                .into_iter()
                .find(|post| post.id == wanted)
                .ok_or_else(|| DomainError::post_not_found(raw))
        }
        None => posts.into_iter().next().ok_or(DomainError::NoPosts),
    }
}

/// Resolve a post's image path against the API base URL. Absolute URLs are
/// returned unchanged.
pub fn image_src(base: &Url, image: &str) -> Option<String> {
    if let Ok(absolute) = Url::parse(image) {
        return Some(absolute.into());
    }
    base.join(image.trim_start_matches('/')).ok().map(Into::into)
}

fn parse_post_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
