//! Structured error types shared across ATN crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AtnError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, ids, token positions, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the ATN tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AtnError {
    /// Node-config text could not be decoded.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// A requested artifact (set, batch, sequence, file) does not exist.
    #[error("not found: {0}")]
    NotFound(ErrorInfo),
    /// Creation was requested where an artifact already exists.
    #[error("already exists: {0}")]
    AlreadyExists(ErrorInfo),
    /// Underlying storage failure.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Invalid generator request or generator input.
    #[error("generator error: {0}")]
    Generator(ErrorInfo),
    /// The external simulation runner failed.
    #[error("runner error: {0}")]
    Runner(ErrorInfo),
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl AtnError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AtnError::Parse(info)
            | AtnError::NotFound(info)
            | AtnError::AlreadyExists(info)
            | AtnError::Io(info)
            | AtnError::Serde(info)
            | AtnError::Generator(info)
            | AtnError::Runner(info)
            | AtnError::Config(info) => info,
        }
    }

    /// Returns true when the error means "doesn't exist yet" rather than a
    /// storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AtnError::NotFound(_))
    }

    /// Wraps an I/O error, mapping `ErrorKind::NotFound` and
    /// `ErrorKind::AlreadyExists` onto their dedicated families.
    pub fn from_io(code: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        let info = ErrorInfo::new(code, err.to_string())
            .with_context("path", path.display().to_string());
        match err.kind() {
            std::io::ErrorKind::NotFound => AtnError::NotFound(info),
            std::io::ErrorKind::AlreadyExists => AtnError::AlreadyExists(info),
            _ => AtnError::Io(info),
        }
    }
}
