//! Error types for barkeep.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Conditions the player can recover from (blank input, no match, ambiguity,
//! a rejected purchase) are not errors; they are reported through the
//! resolver's outcome type and the loop's checker verdicts.

use std::fmt;

use thiserror::Error;

/// The main error type for barkeep operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported candidate kind error for the named type.
    #[must_use]
    pub fn unsupported_candidate(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedCandidateKind {
            type_name: type_name.into(),
        })
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(command.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A candidate source was not a category, a named instance, or a literal.
    #[error("unsupported candidate kind: {type_name}")]
    UnsupportedCandidateKind {
        /// Rust type name of the offending value.
        type_name: String,
    },

    /// A command string did not map back to any object.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A configuration value was out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading from the terminal failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Writing output or reading a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using barkeep's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Screen that was active.
    pub screen: Option<String>,
    /// Trail of operations leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active screen.
    #[must_use]
    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(screen) = &self.screen {
            write!(f, "on screen {screen}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
