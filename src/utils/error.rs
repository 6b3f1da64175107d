use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Content error: {message}")]
    ContentError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Content,
    Render,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Build degraded but produced output.
    Low,
    /// Bad input that the author can fix.
    Medium,
    /// Build failed mid-flight.
    High,
    /// Environment problem outside the tool's control.
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::ContentError { .. } => ErrorCategory::Content,
            SiteError::RenderError { .. } | SiteError::SerializationError(_) => {
                ErrorCategory::Render
            }
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::ContentError { .. } => ErrorSeverity::Medium,
            SiteError::RenderError { .. } | SiteError::SerializationError(_) => {
                ErrorSeverity::High
            }
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::ConfigValidationError { field, .. }
            | SiteError::InvalidConfigValueError { field, .. }
            | SiteError::MissingConfigError { field } => {
                format!("Fix the '{}' entry in the content file and rerun", field)
            }
            SiteError::ContentError { .. } => {
                "Check that the content TOML file exists and parses".to_string()
            }
            SiteError::RenderError { .. } | SiteError::SerializationError(_) => {
                "Rerun with --verbose and inspect the failing entry".to_string()
            }
            SiteError::IoError(_) => {
                "Check the output directory exists and is writable".to_string()
            }
            SiteError::ZipError(_) => {
                "Retry without --archive, then check free disk space".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ConfigValidationError { field, message } => {
                format!("Content configuration problem ({}): {}", field, message)
            }
            SiteError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            SiteError::MissingConfigError { field } => {
                format!("The content file is missing '{}'", field)
            }
            SiteError::ContentError { message } => format!("Could not load content: {}", message),
            SiteError::RenderError { message } => format!("Could not render the site: {}", message),
            SiteError::SerializationError(_) => "Could not write the site manifest".to_string(),
            SiteError::IoError(e) => format!("File system problem: {}", e),
            SiteError::ZipError(e) => format!("Could not build the site archive: {}", e),
        }
    }
}
