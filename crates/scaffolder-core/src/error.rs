//! Error types surfaced by the scaffolder
//!
//! Only `Cancelled` is a graceful outcome; everything else aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user declined to overwrite an existing directory
    #[error("Operation cancelled.")]
    Cancelled,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {}", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

impl ScaffoldError {
    /// Whether this error is the user-declined outcome
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message() {
        let err = ScaffoldError::CommandFailed {
            command: "npm install".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`npm install` failed with exit code 1");

        let err = ScaffoldError::CommandFailed {
            command: "npm install".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_cancelled_is_detected_through_anyhow() {
        let err: anyhow::Error = ScaffoldError::Cancelled.into();
        let cancelled = err
            .downcast_ref::<ScaffoldError>()
            .is_some_and(ScaffoldError::is_cancelled);
        assert!(cancelled);
    }
}
