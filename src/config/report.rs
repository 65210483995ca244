use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

impl ReportFormat {
    pub fn from_env() -> Self {
        match env::var("REPORT_FORMAT") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("Invalid REPORT_FORMAT: {}, falling back to text", err);
                ReportFormat::Text
            }),
            Err(_) => ReportFormat::default(),
        }
    }
}
