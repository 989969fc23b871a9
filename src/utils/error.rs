use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Memory allocation failed while creating an antenna")]
    AllocationFailure,

    #[error("Cannot read grid source '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write binary destination '{path}': {source}")]
    DestinationUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Grid too large: {axis} index {index} does not fit a 32-bit coordinate")]
    GridTooLarge { axis: &'static str, index: usize },

    #[error("Frequency '{frequency}' cannot be stored in a single byte")]
    UnencodableFrequency { frequency: char },

    #[error("Corrupt antenna record: {message}")]
    CorruptRecord { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resource,
    Input,
    Output,
    Encoding,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GridError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GridError::AllocationFailure => ErrorCategory::Resource,
            GridError::SourceUnavailable { .. } | GridError::GridTooLarge { .. } => {
                ErrorCategory::Input
            }
            GridError::DestinationUnavailable { .. } | GridError::IoError(_) => {
                ErrorCategory::Output
            }
            GridError::UnencodableFrequency { .. } | GridError::CorruptRecord { .. } => {
                ErrorCategory::Encoding
            }
            GridError::ConfigError { .. }
            | GridError::ConfigValidationError { .. }
            | GridError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 決定錯誤嚴重程度，CLI 依此選擇退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GridError::AllocationFailure => ErrorSeverity::Critical,
            // 匯出失敗時清單與矩陣已輸出，仍以 0 結束
            GridError::DestinationUnavailable { .. } | GridError::UnencodableFrequency { .. } => {
                ErrorSeverity::Low
            }
            GridError::IoError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// CLI 退出碼：Low 0、Medium 2、High 1、Critical 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GridError::AllocationFailure => "Free some memory or split the grid into smaller files",
            GridError::SourceUnavailable { .. } => {
                "Check that the grid file exists and is readable"
            }
            GridError::DestinationUnavailable { .. } => {
                "Check that the output directory exists and is writable"
            }
            GridError::GridTooLarge { .. } => "Reduce the grid size",
            GridError::UnencodableFrequency { .. } => {
                "Use frequency characters in the Latin-1 range (e.g. letters and digits)"
            }
            GridError::CorruptRecord { .. } => {
                "Make sure the file was exported with the same record layout"
            }
            GridError::IoError(_) => "Check disk space and file permissions",
            GridError::ConfigError { .. } | GridError::ConfigValidationError { .. } => {
                "Check the configuration file syntax"
            }
            GridError::InvalidConfigValueError { .. } => "Fix the offending configuration value",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GridError::SourceUnavailable { path, .. } => {
                format!("Erro ao abrir o ficheiro '{}'", path)
            }
            GridError::DestinationUnavailable { path, .. } => {
                format!("Erro ao abrir ficheiro binário '{}' para escrita", path)
            }
            GridError::AllocationFailure => "Erro de alocação de memória".to_string(),
            other => other.to_string(),
        }
    }
}
