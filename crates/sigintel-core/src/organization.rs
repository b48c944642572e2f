use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The organization whose signal environment is being monitored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Extra terms that make a signal more relevant when they appear in it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Organization {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: None,
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the organization carries a usable name.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct OrganizationFile {
    pub organization: Organization,
}

/// Load and validate the organization profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_organization(path: &Path) -> Result<OrganizationFile, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::OrganizationFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let org_file: OrganizationFile =
        serde_yaml::from_str(&content).map_err(ConfigError::OrganizationFileParse)?;

    validate_organization(&org_file.organization)?;

    Ok(org_file)
}

fn validate_organization(org: &Organization) -> Result<(), ConfigError> {
    if !org.has_name() {
        return Err(ConfigError::Validation(
            "organization name must be non-empty".to_string(),
        ));
    }

    if org
        .industry
        .as_deref()
        .is_some_and(|industry| industry.trim().is_empty())
    {
        return Err(ConfigError::Validation(format!(
            "organization '{}' has a blank industry; omit the field instead",
            org.name
        )));
    }

    let mut seen = HashSet::new();
    for keyword in &org.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "organization '{}' has a blank keyword",
                org.name
            )));
        }
        if !seen.insert(keyword.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{keyword}'"
            )));
        }
    }

    Ok(())
}
