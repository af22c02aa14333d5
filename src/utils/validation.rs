use crate::utils::error::{DigestError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DigestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DigestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DigestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DigestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DigestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(DigestError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one non-empty entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_year_range(field_name: &str, min_years: i32, max_years: i32) -> Result<()> {
    if min_years < 0 {
        return Err(DigestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: min_years.to_string(),
            reason: "Years cannot be negative".to_string(),
        });
    }
    if max_years < min_years {
        return Err(DigestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: max_years.to_string(),
            reason: format!("Upper bound must be at least the lower bound ({})", min_years),
        });
    }
    Ok(())
}
