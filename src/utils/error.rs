use thiserror::Error;

/// 取得 session cookie 的說明，缺少 `AOC_SESSION` 時顯示給使用者
pub const SESSION_HELP: &str = "Fetch it from a logged in session in your browser, using the devtools to find the right cookie (i.e. in Chrome open the devtools, go to Application > Storage > Cookies > https://adventofcode.com > session)";

#[derive(Error, Debug)]
pub enum AocError {
    #[error("Invalid day for Advent of Code: {value} (type: {type_name})")]
    InvalidDay { value: String, type_name: &'static str },

    #[error("No AoC session cookie found in environment. {}", SESSION_HELP)]
    MissingSession,

    #[error("Failed to resolve repository root: {message}")]
    RepoRootError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authentication,
    Repository,
    Network,
    FileSystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AocError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AocError::InvalidDay { .. } => ErrorCategory::Validation,
            AocError::MissingSession => ErrorCategory::Authentication,
            AocError::RepoRootError { .. } => ErrorCategory::Repository,
            AocError::ApiError(_) => ErrorCategory::Network,
            AocError::IoError(_) => ErrorCategory::FileSystem,
            AocError::ConfigValidationError { .. } | AocError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Validation
            | ErrorCategory::Authentication
            | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Repository | ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    /// 結束碼：設定/驗證 → 1，網路 → 2，檔案系統/git → 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AocError::InvalidDay { .. } => self.to_string(),
            AocError::MissingSession => "AOC_SESSION is not set".to_string(),
            AocError::RepoRootError { .. } => {
                "Could not find the root of the current git repository".to_string()
            }
            AocError::ApiError(e) => format!("Could not download the puzzle input: {}", e),
            AocError::IoError(e) => format!("Could not write the puzzle input: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AocError::InvalidDay { .. } => "Pick a day between 1 and 25".to_string(),
            AocError::MissingSession => format!("Export AOC_SESSION. {}", SESSION_HELP),
            AocError::RepoRootError { .. } => {
                "Run the command from inside a git checkout and make sure git is on PATH"
                    .to_string()
            }
            AocError::ApiError(_) => {
                "Check your network connection and that the puzzle is already unlocked"
                    .to_string()
            }
            AocError::IoError(_) => {
                "Check the permissions of the data directory in the repository".to_string()
            }
            AocError::ConfigValidationError { .. } | AocError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AocError>;
