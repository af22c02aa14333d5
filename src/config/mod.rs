pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::FilterConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "job-digest")]
#[command(about = "Filters, scores and ranks job postings from JSON feeds")]
pub struct CliConfig {
    /// JSON feed endpoints delivering arrays of raw postings.
    #[arg(long, value_delimiter = ',')]
    pub feed_endpoints: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Skill vocabulary, scanned against title and description.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "python,tensorflow,pytorch,scikit-learn,machine learning,deep learning,ai,artificial intelligence"
    )]
    pub preferred_skills: Vec<String>,

    #[arg(long, default_value = "1")]
    pub min_skill_score: usize,

    #[arg(long, default_value = "0")]
    pub experience_min_years: i32,

    #[arg(long, default_value = "10")]
    pub experience_max_years: i32,

    /// Whether postings with no recognizable experience requirement pass.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub include_unknown_experience: bool,

    /// Disqualifying keywords, e.g. "intern,unpaid".
    #[arg(long, value_delimiter = ',')]
    pub exclude_keywords: Vec<String>,

    #[arg(long, default_value = "24")]
    pub time_range_hours: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_endpoints(&self) -> &[String] {
        &self.feed_endpoints
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            preferred_skills: self.preferred_skills.clone(),
            min_skill_score: self.min_skill_score,
            experience_min_years: self.experience_min_years,
            experience_max_years: self.experience_max_years,
            include_unknown_experience: self.include_unknown_experience,
            exclude_keywords: self.exclude_keywords.clone(),
            time_range_hours: self.time_range_hours,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for endpoint in &self.feed_endpoints {
            validation::validate_url("feed_endpoints", endpoint)?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_list("preferred_skills", &self.preferred_skills)?;
        validation::validate_year_range(
            "experience_min_years/experience_max_years",
            self.experience_min_years,
            self.experience_max_years,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["job-digest", "--feed-endpoints", "https://example.com/feed"])
    }

    #[test]
    fn test_defaults_match_fail_open_posture() {
        let config = base_config();
        assert!(config.include_unknown_experience);
        assert_eq!(config.min_skill_score, 1);
        assert_eq!(config.time_range_hours, 24);
        assert!(config.exclude_keywords.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filter_config_mirrors_flags() {
        let config = CliConfig::parse_from([
            "job-digest",
            "--feed-endpoints",
            "https://example.com/feed",
            "--preferred-skills",
            "rust,tokio",
            "--min-skill-score",
            "2",
            "--experience-min-years",
            "3",
            "--experience-max-years",
            "8",
            "--include-unknown-experience",
            "false",
            "--exclude-keywords",
            "intern",
        ]);

        let filter = config.filter_config();
        assert_eq!(filter.preferred_skills, vec!["rust", "tokio"]);
        assert_eq!(filter.min_skill_score, 2);
        assert_eq!(filter.experience_min_years, 3);
        assert_eq!(filter.experience_max_years, 8);
        assert!(!filter.include_unknown_experience);
        assert_eq!(filter.exclude_keywords, vec!["intern"]);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint_and_range() {
        let mut config = base_config();
        config.feed_endpoints = vec!["not-a-url".to_string()];
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.experience_min_years = 8;
        config.experience_max_years = 2;
        assert!(config.validate().is_err());
    }
}
