//! Route state derived from the URL fragment.

use std::collections::BTreeMap;

pub const HOME_PAGE: &str = "home";
pub const DASHBOARD_PAGE: &str = "dashboard";
pub const POST_REVIEW_PAGE: &str = "post-review";
pub const POST_ID_PARAM: &str = "postId";

const POST_REVIEW_PREFIX: &str = "post-review/";

/// Current page and its path parameters. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteState {
    pub page_id: String,
    pub params: BTreeMap<String, String>,
}

impl RouteState {
    pub fn page(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn home() -> Self {
        Self::page(HOME_PAGE)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Build the fragment that addresses `page_id`.
pub fn fragment_for(page_id: &str) -> String {
    format!("#/{page_id}")
}

/// Whether the fragment carries no route and must be defaulted by the caller.
pub fn is_blank(fragment: &str) -> bool {
    fragment.is_empty() || fragment == "#"
}

/// Map a fragment such as `#/post-review/2` to its route state.
///
/// Only `post-review/<id>` carries a parameter; every other path becomes the
/// page id verbatim. Blank fragments are the caller's concern, see [`is_blank`].
pub fn parse_fragment(fragment: &str) -> RouteState {
    let path = fragment
        .strip_prefix("#/")
        .or_else(|| fragment.strip_prefix('#'))
        .unwrap_or(fragment);

    match path.strip_prefix(POST_REVIEW_PREFIX) {
        Some(rest) => {
            let post_id = rest.split('/').next().unwrap_or_default();
            let mut params = BTreeMap::new();
            params.insert(POST_ID_PARAM.to_string(), post_id.to_string());
            RouteState {
                page_id: POST_REVIEW_PAGE.to_string(),
                params,
            }
        }
        None => RouteState::page(path),
    }
}
