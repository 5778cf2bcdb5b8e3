use std::path::PathBuf;

use thiserror::Error;

/// Validation failures raised while processing an article draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArticleError {
    /// The title has fewer characters than the configured minimum
    #[error("Title is too short")]
    TitleTooShort,
    /// The content has fewer characters than the configured minimum
    #[error("Content is too short")]
    ContentTooShort,
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// An article draft failed validation
    #[error(transparent)]
    Article(#[from] ArticleError),

    /// A machine was asked for an operation outside its capability
    #[error("{machine} machine cannot {operation}")]
    Unsupported {
        /// Human-readable machine name, e.g. "Basic"
        machine: &'static str,
        /// The rejected operation, e.g. "brew Cappuccino"
        operation: &'static str,
    },

    /// Writing to an output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("cannot read config file {}", path.display())]
    ConfigRead {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::Config`]
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Unknown customer tier name
    #[error("invalid customer tier: {0} (expected regular, premium, vip or super-vip)")]
    InvalidTier(String),

    /// Unknown notification channel name
    #[error("invalid notification channel: {0} (expected email or sms)")]
    InvalidChannel(String),

    /// Unknown export format name
    #[error("invalid export format: {0} (expected json, csv or xml)")]
    InvalidFormat(String),
}

/// Result alias using the crate [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_messages_are_stable() {
        assert_eq!(ArticleError::TitleTooShort.to_string(), "Title is too short");
        assert_eq!(
            ArticleError::ContentTooShort.to_string(),
            "Content is too short"
        );
    }

    #[test]
    fn article_error_is_transparent() {
        let err: Error = ArticleError::TitleTooShort.into();
        assert_eq!(err.to_string(), "Title is too short");
        assert!(matches!(err, Error::Article(ArticleError::TitleTooShort)));
    }

    #[test]
    fn config_read_keeps_source() {
        let err = Error::ConfigRead {
            path: PathBuf::from("solid.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read config file solid.toml");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn unsupported_message_names_machine_and_operation() {
        let err = Error::Unsupported {
            machine: "Basic",
            operation: "steam milk",
        };
        assert_eq!(err.to_string(), "Basic machine cannot steam milk");
    }
}
