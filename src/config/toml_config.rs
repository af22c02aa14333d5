use crate::core::ConfigProvider;
use crate::domain::model::FilterConfig;
use crate::utils::error::{DigestError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub digest: DigestSection,
    pub sources: SourcesSection,
    #[serde(default)]
    pub filter: FilterConfig,
    pub load: LoadSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestSection {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesSection {
    /// JSON feed endpoints, fetched in order.
    pub endpoints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSection {
    pub output_path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DigestError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DigestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn feed_endpoints(&self) -> &[String] {
        &self.sources.endpoints
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn filter_config(&self) -> FilterConfig {
        self.filter.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("sources.endpoints", &self.sources.endpoints)?;
        for endpoint in &self.sources.endpoints {
            validation::validate_url("sources.endpoints", endpoint)?;
        }
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_non_empty_list("filter.preferred_skills", &self.filter.preferred_skills)?;
        validation::validate_year_range(
            "filter.experience_min_years/experience_max_years",
            self.filter.experience_min_years,
            self.filter.experience_max_years,
        )?;
        Ok(())
    }
}
