use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClearRamError {
    #[error("Invalid input: {input:?}")]
    InvalidInput { input: String },

    #[error("Invalid option: {value}")]
    InvalidOption { value: i64 },

    #[error("Failed to execute `{command}`: {source}")]
    ExecError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Execution,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ClearRamError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidOption { .. } => ErrorCategory::UserInput,
            Self::ExecError { .. } => ErrorCategory::Execution,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Execution | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序結束時使用的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { .. } => {
                "Invalid input. Please enter a number between 1 and 4.".to_string()
            }
            Self::InvalidOption { .. } => "Invalid option. Exiting.".to_string(),
            Self::ExecError { command, source } => {
                format!("Could not run `{}`: {}", command, source)
            }
            Self::IoError(e) => format!("I/O failure: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration field '{}' has bad value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::InvalidOption { .. } => {
                "Run again and choose 1, 2, 3 or 4"
            }
            Self::ExecError { .. } => {
                "Check that the escalation program and shell exist and are on PATH"
            }
            Self::IoError(_) => "Check that standard input and output are available",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or run without --config to use the defaults"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClearRamError>;
