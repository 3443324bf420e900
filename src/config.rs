use crate::error::{ScResult, StageCardError};
use clap::Args;
use strum_macros::{Display, EnumString};

pub const DEFAULT_BASE_URL: &str = "https://s3.amazonaws.com/ps-scores/production";
pub const DEFAULT_MATCH_ID: &str = "Default";
pub const DEFAULT_DIVISION: &str = "Carry Optics";
pub const DEFAULT_DIVISION_ALT: &str = "CO";

/// Who to report on, and in which division.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Match id, copied from the results page URL.
    #[arg(long = "match_id", visible_alias = "match-id", default_value = DEFAULT_MATCH_ID)]
    pub match_id: String,

    /// Registered name, formatted "Last, First".
    #[arg(long = "shooter_name", visible_alias = "shooter-name", default_value = "")]
    pub shooter_name: String,

    #[arg(long, default_value = DEFAULT_DIVISION)]
    pub division: String,

    /// Some matches score the division under a short label (e.g. "CO").
    #[arg(long = "division_alt", visible_alias = "division-alt", default_value = DEFAULT_DIVISION_ALT)]
    pub division_alt: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            match_id: DEFAULT_MATCH_ID.to_string(),
            shooter_name: String::new(),
            division: DEFAULT_DIVISION.to_string(),
            division_alt: DEFAULT_DIVISION_ALT.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn new(match_id: &str, shooter_name: &str) -> Self {
        Self {
            match_id: match_id.to_string(),
            shooter_name: shooter_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_divisions(mut self, division: &str, division_alt: &str) -> Self {
        self.division = division.to_string();
        self.division_alt = division_alt.to_string();
        self
    }

    /// The match id becomes a URL path segment, so it must be a single segment.
    pub fn validate(&self) -> ScResult<()> {
        let id = self.match_id.trim();
        if id.is_empty() {
            return Err(StageCardError::Config("match id is empty".to_string()));
        }
        if id.contains(['/', '\\', '?', '#']) || id == ".." {
            return Err(StageCardError::Config(format!(
                "match id '{}' is not a single path segment",
                self.match_id
            )));
        }
        if self.division.is_empty() || self.division_alt.is_empty() {
            return Err(StageCardError::Config(
                "division labels must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, clap::ValueEnum)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ReportConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_path_like_match_id() {
        let cfg = ReportConfig::new("abc/../def", "Wang, Ken");
        assert!(matches!(cfg.validate(), Err(StageCardError::Config(_))));
    }

    #[test]
    fn rejects_blank_match_id() {
        let cfg = ReportConfig::new("  ", "Wang, Ken");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn output_format_parses_snake_case() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }
}
