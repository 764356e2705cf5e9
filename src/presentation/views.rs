//! Serializable view models for the active page.

use serde::Serialize;
use url::Url;

use crate::application::{
    resolver::Page,
    review::ReviewWorkflow,
    session::{ReviewState, Session},
};
use crate::domain::{
    comments::Comment,
    posts::{Post, PostStatus, image_src},
    route::DASHBOARD_PAGE,
};

const BACK_TO_DASHBOARD: Action = Action {
    label: "Back to Dashboard",
    target: DASHBOARD_PAGE,
};

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub page: &'static str,
    pub title: &'static str,
    pub fragment: String,
    pub body: ViewBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewBody<'a> {
    Static {
        heading: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<&'static str>,
    },
    Loading {
        message: &'static str,
    },
    PostReview(ReviewView<'a>),
    NotFound {
        message: String,
        action: Action,
    },
    LoadError {
        message: String,
        action: Action,
    },
}

/// A control that navigates to `target` when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReviewView<'a> {
    pub post: &'a Post,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    pub status: PostStatus,
    pub approve: Control,
    pub reject: Control,
    pub comment_groups: Vec<CommentGroupView<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct CommentGroupView<'a> {
    pub heading: String,
    pub comments: Vec<&'a Comment>,
}

pub fn render<'a>(session: &'a Session, asset_base: &Url) -> PageView<'a> {
    let resolved = session.page();
    let body = match &resolved.page {
        Page::PostReview { .. } => match session.review().map(|mount| &mount.state) {
            None | Some(ReviewState::Loading) => ViewBody::Loading {
                message: "Loading post...",
            },
            Some(ReviewState::Ready(workflow)) => {
                ViewBody::PostReview(review_view(workflow, asset_base))
            }
            Some(ReviewState::NotFound(id)) => ViewBody::NotFound {
                message: format!("Post with ID {id} not found"),
                action: BACK_TO_DASHBOARD,
            },
            Some(ReviewState::Failed(message)) => ViewBody::LoadError {
                message: message.clone(),
                action: BACK_TO_DASHBOARD,
            },
        },
        page => static_body(page),
    };

    PageView {
        page: resolved.page.key(),
        title: resolved.title,
        fragment: session.router().location().fragment(),
        body,
    }
}

fn review_view<'a>(workflow: &'a ReviewWorkflow, asset_base: &Url) -> ReviewView<'a> {
    let post = workflow.post();
    let can_act = workflow.can_act();
    let comment_groups = workflow
        .grouped_comments()
        .into_iter()
        .map(|group| CommentGroupView {
            heading: match group.review_date {
                Some(date) => format!("Review requested on {date}"),
                None => "Review notes".to_string(),
            },
            comments: group.comments,
        })
        .collect();

    ReviewView {
        post,
        image_src: post
            .image
            .as_deref()
            .and_then(|image| image_src(asset_base, image)),
        status: post.status,
        approve: Control {
            label: if can_act { "Approve" } else { "Approved" },
            enabled: can_act,
        },
        reject: Control {
            label: "Reject",
            enabled: can_act,
        },
        comment_groups,
    }
}

fn static_body(page: &Page) -> ViewBody<'static> {
    let (heading, notice) = match page {
        Page::Home | Page::PostReview { .. } => ("Create on-brand content in minutes", None),
        Page::Dashboard => ("Content overview", None),
        Page::CreatePost => ("Draft a new post", None),
        Page::BrandProfile => ("Your brand voice", None),
        Page::Features => ("Everything your team needs to stay on brand", None),
        Page::Pricing => ("Pricing", Some("Pricing information coming soon!")),
        Page::About => ("About", Some("Learn more about our team and mission soon!")),
    };
    ViewBody::Static { heading, notice }
}
