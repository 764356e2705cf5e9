//! Page table: which view a page id renders and under what title.

use crate::domain::route::{POST_ID_PARAM, RouteState};

pub const FALLBACK_TITLE: &str = "on.brand";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    CreatePost,
    PostReview { post_id: Option<String> },
    BrandProfile,
    Features,
    Pricing,
    About,
}

impl Page {
    /// The page id this view is registered under.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::CreatePost => "create-post",
            Page::PostReview { .. } => "post-review",
            Page::BrandProfile => "brand-profile",
            Page::Features => "features",
            Page::Pricing => "pricing",
            Page::About => "about",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: Page,
    pub title: &'static str,
}

/// Resolve a route to its view. Unknown page ids render the home view under
/// the generic title.
pub fn resolve(route: &RouteState) -> ResolvedPage {
    let (page, title) = match route.page_id.as_str() {
        "home" => (Page::Home, "Welcome to on.brand"),
        "dashboard" => (Page::Dashboard, "Dashboard"),
        "create-post" => (Page::CreatePost, "Create New Post"),
        "post-review" => (
            Page::PostReview {
                post_id: route.param(POST_ID_PARAM).map(str::to_string),
            },
            "Post Review",
        ),
        "brand-profile" => (Page::BrandProfile, "Brand Profile"),
        "features" => (Page::Features, "Features"),
        "pricing" => (Page::Pricing, "Pricing"),
        "about" => (Page::About, "About Us"),
        _ => (Page::Home, FALLBACK_TITLE),
    };
    ResolvedPage { page, title }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::route::parse_fragment;

    #[test]
    fn known_pages_resolve_with_titles() {
        let cases = [
            ("home", Page::Home, "Welcome to on.brand"),
            ("dashboard", Page::Dashboard, "Dashboard"),
            ("create-post", Page::CreatePost, "Create New Post"),
            ("brand-profile", Page::BrandProfile, "Brand Profile"),
            ("features", Page::Features, "Features"),
            ("pricing", Page::Pricing, "Pricing"),
            ("about", Page::About, "About Us"),
        ];
        for (id, page, title) in cases {
            let resolved = resolve(&RouteState::page(id));
            assert_eq!(resolved.page, page);
            assert_eq!(resolved.title, title);
            assert_eq!(resolved.page.key(), id);
        }
    }

    #[test]
    fn post_review_threads_the_post_id() {
        let resolved = resolve(&parse_fragment("#/post-review/2/extra"));
        assert_eq!(
            resolved.page,
            Page::PostReview {
                post_id: Some("2".to_string())
            }
        );
        assert_eq!(resolved.title, "Post Review");

        let bare = resolve(&RouteState::page("post-review"));
        assert_eq!(bare.page, Page::PostReview { post_id: None });
    }

    #[test]
    fn unknown_pages_fall_back_to_home() {
        for id in ["", "settings", "Dashboard", "post-review-x"] {
            let resolved = resolve(&RouteState::page(id));
            assert_eq!(resolved.page, Page::Home);
            assert_eq!(resolved.title, FALLBACK_TITLE);
        }
    }
}
