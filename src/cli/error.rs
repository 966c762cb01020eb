//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::FileNotFound(_)) => crate::exitcode::NOINPUT,
                ApplicationError::Domain(DomainError::Read(_)) => crate::exitcode::IOERR,
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::NoTree => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_load_failures_when_mapping_exit_codes_then_distinguishes_missing_from_malformed() {
        let missing: CliError = DomainError::FileNotFound(PathBuf::from("x.tree")).into();
        let malformed: CliError = DomainError::MissingCount.into();

        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(malformed.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(CliError::Usage("x".into()).exit_code(), crate::exitcode::USAGE);
    }
}
