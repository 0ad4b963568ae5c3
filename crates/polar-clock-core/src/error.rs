//! Startup error taxonomy.
//!
//! Every failure of the bootstrap sequence is fatal: there are no retries and
//! no fallbacks. Each variant carries a stable short code so the JS side can
//! branch on it without parsing messages.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// No element with the configured id exists in the document.
    MountNotFound { id: String },
    /// The host reported a viewport that is not a pair of positive integers.
    InvalidViewport { width: String, height: String },
    /// The host could not report a viewport at all.
    ViewportUnavailable(String),
    /// The style-support query is missing and the probe runs in strict mode.
    ColorQueryUnavailable,
    /// The external application rejected or failed the `init` call.
    AppInit(String),
    InvalidConfig(String),
    Serialization(String),
    /// The page already ran its bootstrap once.
    AlreadyStarted,
}

impl BootstrapError {
    pub fn code(&self) -> &'static str {
        match self {
            BootstrapError::MountNotFound { .. } => "E001",
            BootstrapError::InvalidViewport { .. } => "E002",
            BootstrapError::ViewportUnavailable(_) => "E003",
            BootstrapError::ColorQueryUnavailable => "E004",
            BootstrapError::AppInit(_) => "E005",
            BootstrapError::InvalidConfig(_) => "E006",
            BootstrapError::Serialization(_) => "E007",
            BootstrapError::AlreadyStarted => "E008",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            BootstrapError::MountNotFound { .. } => "Mount Point Not Found",
            BootstrapError::InvalidViewport { .. } => "Invalid Viewport",
            BootstrapError::ViewportUnavailable(_) => "Viewport Unavailable",
            BootstrapError::ColorQueryUnavailable => "Color Query Unavailable",
            BootstrapError::AppInit(_) => "Application Init Error",
            BootstrapError::InvalidConfig(_) => "Invalid Configuration",
            BootstrapError::Serialization(_) => "Serialization Error",
            BootstrapError::AlreadyStarted => "Already Started",
        }
    }
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.code(), self.error_type())?;
        match self {
            BootstrapError::MountNotFound { id } => {
                write!(f, "no element with id '{id}' in the document")
            }
            BootstrapError::InvalidViewport { width, height } => {
                write!(f, "expected positive integers, got {width}x{height}")
            }
            BootstrapError::ViewportUnavailable(msg)
            | BootstrapError::AppInit(msg)
            | BootstrapError::InvalidConfig(msg)
            | BootstrapError::Serialization(msg) => f.write_str(msg),
            BootstrapError::ColorQueryUnavailable => {
                f.write_str("host does not expose a style-support query")
            }
            BootstrapError::AlreadyStarted => {
                f.write_str("bootstrap runs once per page load")
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<serde_json::Error> for BootstrapError {
    fn from(err: serde_json::Error) -> Self {
        BootstrapError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_detail() {
        let err = BootstrapError::MountNotFound {
            id: "polar-clock".into(),
        };
        assert_eq!(
            err.to_string(),
            "[E001] Mount Point Not Found: no element with id 'polar-clock' in the document"
        );
    }

    #[test]
    fn codes_are_unique() {
        let all = [
            BootstrapError::MountNotFound { id: String::new() },
            BootstrapError::InvalidViewport {
                width: String::new(),
                height: String::new(),
            },
            BootstrapError::ViewportUnavailable(String::new()),
            BootstrapError::ColorQueryUnavailable,
            BootstrapError::AppInit(String::new()),
            BootstrapError::InvalidConfig(String::new()),
            BootstrapError::Serialization(String::new()),
            BootstrapError::AlreadyStarted,
        ];
        let mut codes: Vec<&str> = all.iter().map(BootstrapError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
