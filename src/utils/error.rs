use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaffleError {
    #[error("Input file not found: {path}")]
    MissingFile { path: String },

    #[error("No identifiers found in {origin}")]
    EmptyInput { origin: String },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RaffleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RaffleError::MissingFile { .. }
            | RaffleError::EmptyInput { .. }
            | RaffleError::CsvError(_) => ErrorCategory::Input,
            RaffleError::WriteError { .. } | RaffleError::IoError(_) => ErrorCategory::Output,
            RaffleError::ConfigError { .. }
            | RaffleError::InvalidConfigValueError { .. }
            | RaffleError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code; every failure is non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RaffleError::MissingFile { path } => format!("'{}' does not exist", path),
            RaffleError::EmptyInput { origin } => format!("No identifiers found in {}", origin),
            RaffleError::WriteError { path, .. } => format!("Could not write '{}'", path),
            RaffleError::CsvError(e) => format!("Could not parse the input file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RaffleError::MissingFile { .. } => "Check the input path and try again",
            RaffleError::EmptyInput { .. } => {
                "Put one identifier per line in the first column of the input file"
            }
            RaffleError::WriteError { .. } | RaffleError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            RaffleError::CsvError(_) => "Make sure the input is plain comma-delimited text",
            RaffleError::ConfigError { .. }
            | RaffleError::InvalidConfigValueError { .. }
            | RaffleError::MissingConfigError { .. } => "Review the command-line arguments and config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RaffleError>;
