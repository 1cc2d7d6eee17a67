//! Error types for toolsmith
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolsmith
#[derive(Debug, Error)]
pub enum ToolsmithError {
    /// Tool not registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Template parse or substitution error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for toolsmith operations
pub type Result<T> = std::result::Result<T, ToolsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_error() {
        let err = ToolsmithError::ToolNotFound("386asm".to_string());
        assert_eq!(err.to_string(), "Tool not found: 386asm");
    }

    #[test]
    fn test_template_error() {
        let err = ToolsmithError::Template("substitution loop in $ASCOM".to_string());
        assert_eq!(err.to_string(), "Template error: substitution loop in $ASCOM");
    }

    #[test]
    fn test_config_error() {
        let err = ToolsmithError::Config("unknown default tool 'nasm'".to_string());
        assert_eq!(err.to_string(), "Config error: unknown default tool 'nasm'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolsmithError = io_err.into();
        assert!(matches!(err, ToolsmithError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ToolsmithError = json_err.into();
        assert!(matches!(err, ToolsmithError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ToolsmithError::ToolNotFound("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
