//! Text and JSON rendering of the reporting queries.
//!
//! Nothing here touches storage; it only formats what the store returns.

use crate::config::ReportFormat;
use crate::store::{PostThread, PostWithAuthor, UserActivity};
use serde::Serialize;

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 50;
const THREAD_RULE: usize = 40;
const PREVIEW_CHARS: usize = 100;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const NO_POSTS_MARKER: &str = "No posts yet";
pub const NO_COMMENTS_MARKER: &str = "No comments yet";

/// The three reports printed by the demo, in one serializable bundle.
#[derive(Debug, Clone, Serialize)]
pub struct BlogReport {
    pub posts: Vec<PostWithAuthor>,
    pub threads: Vec<PostThread>,
    pub users: Vec<UserActivity>,
}

impl BlogReport {
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok([
                render_posts(&self.posts),
                render_threads(&self.threads),
                render_user_activity(&self.users),
            ]
            .join("\n")),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

pub fn render_posts(posts: &[PostWithAuthor]) -> String {
    let mut out = banner("ALL BLOG POSTS", WIDE_RULE);

    if posts.is_empty() {
        out.push_str(NO_POSTS_MARKER);
        out.push('\n');
        return out;
    }

    for post in posts {
        out.push('\n');
        out.push_str(&format!("ID: {}\n", post.id));
        out.push_str(&format!("Title: {}\n", post.title));
        out.push_str(&format!("Content: {}\n", preview(&post.content)));
        out.push_str(&format!("Author: {}\n", post.author));
        out.push_str(&format!("Category: {}\n", post.category));
        out.push_str(&format!("Date: {}\n", post.created_at.format(TIMESTAMP_FORMAT)));
        out.push_str(&rule('-', WIDE_RULE));
    }

    out
}

pub fn render_threads(threads: &[PostThread]) -> String {
    let mut out = banner("POSTS WITH COMMENTS", WIDE_RULE);

    for thread in threads {
        out.push('\n');
        out.push_str(&format!("Post: '{}' (author: {})\n", thread.title, thread.author));
        out.push_str(&rule('-', THREAD_RULE));

        if !thread.has_comments() {
            out.push_str(&format!("   {}\n", NO_COMMENTS_MARKER));
            continue;
        }

        for comment in &thread.comments {
            out.push_str(&format!("   {}: {}\n", comment.author, comment.text));
            out.push_str(&format!("   {}\n", comment.created_at.format(TIMESTAMP_FORMAT)));
        }
    }

    out
}

pub fn render_user_activity(users: &[UserActivity]) -> String {
    let mut out = banner("USERS AND THEIR ACTIVITY", NARROW_RULE);

    for user in users {
        out.push_str(&format!(
            "{} ({}) - posts: {}\n",
            user.username, user.email, user.post_count
        ));
    }

    out
}

/// Shorten long content to its first hundred characters plus `...`.
pub fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

fn banner(title: &str, width: usize) -> String {
    format!("\n{}{}\n{}", rule('=', width), title, rule('=', width))
}

fn rule(fill: char, width: usize) -> String {
    let mut line: String = std::iter::repeat(fill).take(width).collect();
    line.push('\n');
    line
}
