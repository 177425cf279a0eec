use thiserror::Error;

/// Describes the potential error conditions that might arise from rsvss operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An option name that is not in the option table.
    #[error("unknown option {0:?}")]
    UnknownOption(String),

    /// A value that the named option does not accept.
    #[error("invalid value {value:?} for option {option:?}")]
    InvalidOptionValue { option: String, value: String },

    /// An option table that failed validation while being built.
    #[error("invalid option table: {0}")]
    InvalidOptionTable(String),

    /// No `ss.exe` could be located for this repository.
    #[error("unable to locate the SourceSafe executable (ss.exe)")]
    ToolNotFound,

    /// `ss.exe` ran but exited with a non-zero status.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("ss.exe failed with {}", describe_code(.code))]
    CommandFailed {
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}

/// A specialized `Result` type for rsvss operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = Error::UnknownOption("recursiv".to_string());
        assert_eq!(err.to_string(), "unknown option \"recursiv\"");

        let err = Error::InvalidOptionValue {
            option: "format".to_string(),
            value: "rtf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"rtf\" for option \"format\""
        );
    }

    #[test]
    fn command_failed_message() {
        let err = Error::CommandFailed {
            code: Some(100),
            stdout: Vec::new(),
            stderr: Vec::new(),
        };
        assert_eq!(err.to_string(), "ss.exe failed with exit code 100");

        let err = Error::CommandFailed {
            code: None,
            stdout: Vec::new(),
            stderr: Vec::new(),
        };
        assert_eq!(err.to_string(), "ss.exe failed with no exit code");
    }
}
