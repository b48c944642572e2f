use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// YAML file holding the monitored organization's profile.
    pub org_path: PathBuf,
    /// Upper bound on the number of signals accepted in one batch.
    pub max_signals: usize,
}
