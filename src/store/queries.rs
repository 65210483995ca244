use super::BlogStore;
use crate::error::StoreResult;
use sea_orm::{prelude::DateTime, ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};
use serde::Serialize;

const POSTS_WITH_AUTHORS_SQL: &str = "\
    SELECT p.id, p.title, p.content, p.created_at, \
           u.username AS author, c.name AS category \
    FROM posts p \
    JOIN users u ON p.user_id = u.id \
    JOIN categories c ON p.category_id = c.id \
    ORDER BY p.created_at DESC, p.id DESC";

const POSTS_WITH_COMMENTS_SQL: &str = "\
    SELECT p.id AS post_id, p.title AS post_title, u1.username AS post_author, \
           p.created_at AS post_created_at, \
           c.id AS comment_id, c.text AS comment_text, \
           u2.username AS comment_author, c.created_at AS comment_created_at \
    FROM posts p \
    JOIN users u1 ON p.user_id = u1.id \
    LEFT JOIN comments c ON p.id = c.post_id \
    LEFT JOIN users u2 ON c.user_id = u2.id \
    ORDER BY p.created_at DESC, p.id DESC, c.created_at ASC, c.id ASC";

const USERS_WITH_POST_COUNTS_SQL: &str = "\
    SELECT u.id, u.username, u.email, COUNT(p.id) AS post_count \
    FROM users u \
    LEFT JOIN posts p ON u.id = p.user_id \
    GROUP BY u.id, u.username, u.email \
    ORDER BY post_count DESC, u.id ASC";

/// A post joined with its author's username and its category name.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct PostWithAuthor {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime,
    pub author: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadComment {
    pub text: String,
    pub author: String,
    pub created_at: DateTime,
}

/// A post with its comments, oldest first. `comments` is empty when nobody
/// has commented yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostThread {
    pub post_id: i32,
    pub title: String,
    pub author: String,
    pub created_at: DateTime,
    pub comments: Vec<ThreadComment>,
}

impl PostThread {
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct UserActivity {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub post_count: i64,
}

/// One row of the posts/comments outer join.
#[derive(Debug, Clone, FromQueryResult)]
struct ThreadRow {
    post_id: i32,
    post_title: String,
    post_author: String,
    post_created_at: DateTime,
    comment_id: Option<i32>,
    comment_text: Option<String>,
    comment_author: Option<String>,
    comment_created_at: Option<DateTime>,
}

impl BlogStore {
    /// Every post with its author and category, newest first.
    pub async fn list_posts_with_authors(&self) -> StoreResult<Vec<PostWithAuthor>> {
        let db = self.open("list_posts_with_authors").await?;
        let result = fetch_all::<PostWithAuthor>(&db, POSTS_WITH_AUTHORS_SQL).await;
        Self::finish("list_posts_with_authors", db, result).await
    }

    /// Every post, newest first, each with its comments oldest first.
    pub async fn list_posts_with_comments(&self) -> StoreResult<Vec<PostThread>> {
        let db = self.open("list_posts_with_comments").await?;
        let result = fetch_all::<ThreadRow>(&db, POSTS_WITH_COMMENTS_SQL)
            .await
            .map(group_threads);
        Self::finish("list_posts_with_comments", db, result).await
    }

    /// Every user with the number of posts they wrote, most active first.
    pub async fn list_users_with_post_counts(&self) -> StoreResult<Vec<UserActivity>> {
        let db = self.open("list_users_with_post_counts").await?;
        let result = fetch_all::<UserActivity>(&db, USERS_WITH_POST_COUNTS_SQL).await;
        Self::finish("list_users_with_post_counts", db, result).await
    }
}

async fn fetch_all<T: FromQueryResult>(db: &DatabaseConnection, sql: &str) -> StoreResult<Vec<T>> {
    let rows = T::find_by_statement(Statement::from_string(db.get_database_backend(), sql))
        .all(db)
        .await?;
    Ok(rows)
}

/// Fold the flat join rows into one thread per post.
///
/// Rows arrive ordered by post, so a change of `post_id` starts a new thread.
/// A post without comments yields a single row whose comment columns are NULL.
fn group_threads(rows: Vec<ThreadRow>) -> Vec<PostThread> {
    let mut threads: Vec<PostThread> = Vec::new();

    for row in rows {
        let starts_thread = threads.last().map(|t| t.post_id) != Some(row.post_id);
        if starts_thread {
            threads.push(PostThread {
                post_id: row.post_id,
                title: row.post_title,
                author: row.post_author,
                created_at: row.post_created_at,
                comments: Vec::new(),
            });
        }

        if let (Some(_), Some(text), Some(author), Some(created_at)) = (
            row.comment_id,
            row.comment_text,
            row.comment_author,
            row.comment_created_at,
        ) {
            if let Some(thread) = threads.last_mut() {
                thread.comments.push(ThreadComment {
                    text,
                    author,
                    created_at,
                });
            }
        }
    }

    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> DateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn row(post_id: i32, comment: Option<(i32, &str, &str, u32)>) -> ThreadRow {
        ThreadRow {
            post_id,
            post_title: format!("post {}", post_id),
            post_author: "alex".to_string(),
            post_created_at: at(1),
            comment_id: comment.map(|c| c.0),
            comment_text: comment.map(|c| c.1.to_string()),
            comment_author: comment.map(|c| c.2.to_string()),
            comment_created_at: comment.map(|c| at(c.3)),
        }
    }

    #[test]
    fn empty_rows_give_no_threads() {
        assert!(group_threads(Vec::new()).is_empty());
    }

    #[test]
    fn comments_grouped_under_their_post() {
        let threads = group_threads(vec![
            row(2, Some((1, "first", "maria", 2))),
            row(2, Some((3, "second", "guru", 3))),
            row(1, Some((2, "other", "maria", 4))),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].post_id, 2);
        let texts: Vec<&str> = threads[0].comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(threads[1].comments.len(), 1);
        assert_eq!(threads[1].comments[0].author, "maria");
    }

    #[test]
    fn post_without_comments_appears_once_and_empty() {
        let threads = group_threads(vec![row(5, None), row(4, Some((1, "hi", "alex", 2)))]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].post_id, 5);
        assert!(!threads[0].has_comments());
        assert!(threads[1].has_comments());
    }
}
