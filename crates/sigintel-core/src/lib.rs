//! Shared domain types and configuration for the signal intelligence engine.

mod app_config;
mod config;
pub mod organization;
pub mod signal;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use organization::{load_organization, Organization, OrganizationFile};
pub use signal::{Signal, COMPETITOR_ENTITY_TYPE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read organization profile at {path}: {source}")]
    OrganizationFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse organization profile: {0}")]
    OrganizationFileParse(#[source] serde_yaml::Error),

    #[error("organization profile validation failed: {0}")]
    Validation(String),
}
