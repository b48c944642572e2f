use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller passed an organization without a usable name.
    #[error("invalid organization: {0}")]
    InvalidOrganization(String),
}
