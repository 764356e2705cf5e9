//! Review comment thread.

use serde::Serialize;

pub const AI_REVIEWER: &str = "Marketing Intelligence";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: String,
    #[serde(rename = "isAI", skip_serializing_if = "std::ops::Not::not")]
    pub is_ai: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<String>,
}

impl Comment {
    pub fn ai(text: &str, timestamp: &str, review_date: &str) -> Self {
        Self {
            author: AI_REVIEWER.to_string(),
            text: text.to_string(),
            timestamp: timestamp.to_string(),
            is_ai: true,
            review_date: Some(review_date.to_string()),
        }
    }
}

/// Comments sharing one review date, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentGroup<'a> {
    pub review_date: Option<&'a str>,
    pub comments: Vec<&'a Comment>,
}

/// Append-only comment log. Insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentLog {
    entries: Vec<Comment>,
}

impl CommentLog {
    pub fn seeded(entries: Vec<Comment>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, comment: Comment) {
        self.entries.push(comment);
    }

    pub fn entries(&self) -> &[Comment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Partition by review date. Groups appear in the order their date is
    /// first seen; undated comments share one group of their own.
    pub fn grouped(&self) -> Vec<CommentGroup<'_>> {
        let mut groups: Vec<CommentGroup<'_>> = Vec::new();
        for comment in &self.entries {
            let key = comment.review_date.as_deref();
            match groups.iter_mut().find(|group| group.review_date == key) {
                Some(group) => group.comments.push(comment),
                None => groups.push(CommentGroup {
                    review_date: key,
                    comments: vec![comment],
                }),
            }
        }
        groups
    }
}

/// The AI review thread every workflow starts from.
pub fn default_review_thread() -> Vec<Comment> {
    vec![
        Comment::ai(
            "The headline could be more engaging. Consider adding more specific benefits to capture reader attention.",
            "2023-06-18 14:32",
            "2023-06-18",
        ),
        Comment::ai(
            "Your key features section is well structured. I recommend adding quantifiable benefits for each feature to strengthen your value proposition.",
            "2023-06-18 14:35",
            "2023-06-18",
        ),
        Comment {
            author: "John Doe".to_string(),
            text: "Thanks for the feedback! I'll work on improving the headline and adding more specific benefits.".to_string(),
            timestamp: "2023-06-18 15:10".to_string(),
            is_ai: false,
            review_date: Some("2023-06-18".to_string()),
        },
        Comment::ai(
            "I've analyzed your target audience data. This announcement would perform 37% better with more technical details for your LinkedIn audience.",
            "2023-06-19 09:22",
            "2023-06-19",
        ),
        Comment::ai(
            "The closing call-to-action could be stronger. Consider adding a specific date when users can access these features to create urgency.",
            "2023-06-19 09:25",
            "2023-06-19",
        ),
    ]
}
