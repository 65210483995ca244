pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod schema;
pub mod store;

pub use config::{DatabaseConfig, LogFormat, ReportFormat};
pub use error::{StoreError, StoreResult};
pub use store::{BlogStore, PostThread, PostWithAuthor, StoreStats, ThreadComment, UserActivity};
