pub mod database;
pub mod logging;
pub mod report;

pub use database::DatabaseConfig;
pub use logging::LogFormat;
pub use report::ReportFormat;
