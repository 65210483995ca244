use blogstore::{
    report::BlogReport, BlogStore, DatabaseConfig, LogFormat, ReportFormat, StoreResult,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_USERS: [(&str, &str); 3] = [
    ("alex_dev", "alex@example.com"),
    ("maria_writer", "maria@example.com"),
    ("tech_guru", "tech@example.com"),
];

const DEMO_CATEGORIES: [(&str, &str); 3] = [
    ("Programming", "Articles about software development"),
    ("Design", "UI/UX design and graphics"),
    ("Science", "Scientific articles and research"),
];

/// (title, content, author index, category index)
const DEMO_POSTS: [(&str, &str, usize, usize); 3] = [
    (
        "Python basics for beginners",
        "Python is a powerful language that is easy to learn...",
        0,
        0,
    ),
    (
        "Principles of good UI design",
        "A good user interface should be intuitive...",
        1,
        1,
    ),
    (
        "Artificial intelligence in the modern world",
        "AI technology is evolving fast and changing our lives...",
        2,
        2,
    ),
];

/// (text, post index, author index)
const DEMO_COMMENTS: [(&str, usize, usize); 4] = [
    ("Great article for newcomers!", 0, 1),
    ("Thanks, very helpful!", 0, 2),
    ("Interesting design ideas", 1, 0),
    ("Looking forward to more on AI", 2, 1),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let json_logs = LogFormat::from_env().is_json();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogstore=info".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    let config = DatabaseConfig::from_env();
    let format = ReportFormat::from_env();
    tracing::info!(
        "Starting blog demo v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.url
    );

    let store = BlogStore::new(config);
    store.initialize().await?;

    seed(&store).await;

    let report = BlogReport {
        posts: store.list_posts_with_authors().await?,
        threads: store.list_posts_with_comments().await?,
        users: store.list_users_with_post_counts().await?,
    };
    println!("{}", report.render(format)?);

    let stats = store.stats().await?;
    tracing::info!(
        "Store holds {} users, {} categories, {} posts, {} comments",
        stats.users,
        stats.categories,
        stats.posts,
        stats.comments
    );

    Ok(())
}

/// Insert the demo data. Rejected rows (for example on a second run, when the
/// users already exist) are skipped along with anything that depends on them.
async fn seed(store: &BlogStore) {
    let mut users = Vec::new();
    for (username, email) in DEMO_USERS {
        users.push(accepted(store.add_user(username, email).await));
    }

    let mut categories = Vec::new();
    for (name, description) in DEMO_CATEGORIES {
        categories.push(accepted(store.add_category(name, Some(description)).await));
    }

    let mut posts = Vec::new();
    for (title, content, author, category) in DEMO_POSTS {
        let id = match (users[author], categories[category]) {
            (Some(author_id), Some(category_id)) => {
                accepted(store.create_post(title, content, author_id, category_id).await)
            }
            _ => None,
        };
        posts.push(id);
    }

    for (text, post, author) in DEMO_COMMENTS {
        if let (Some(post_id), Some(author_id)) = (posts[post], users[author]) {
            accepted(store.add_comment(text, post_id, author_id).await);
        }
    }
}

/// Keep the id of a successful insert; rejections were already logged by the store.
fn accepted(result: StoreResult<i32>) -> Option<i32> {
    result.ok()
}
