use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontbrewError {
    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FontbrewError>;
