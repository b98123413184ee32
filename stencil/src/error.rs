use std::borrow::Cow;
use std::fmt;

/// Represents errors from loading or rendering templates.
///
/// Errors carry a [`kind`](Self::kind) that tells the caller which stage of
/// the pipeline failed, an optional detail message, and the underlying cause
/// where one exists (an I/O error, a YAML error, or an engine error with
/// line information).
pub struct Error {
    kind: ErrorKind,
    detail: Option<Cow<'static, str>>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// An enum describing the error kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Template storage could not be read or written.
    Io,
    /// A template document does not match the expected schema.
    Format,
    /// A template body is malformed or references an unknown helper.
    Compile,
    /// Template execution failed (missing variable, bad arguments, or a
    /// helper reported a failure).
    Render,
    /// A function library could not be assembled.
    Registry,
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::Io => "could not access template storage",
            ErrorKind::Format => "invalid template document",
            ErrorKind::Compile => "could not compile template",
            ErrorKind::Render => "could not render template",
            ErrorKind::Registry => "could not assemble function library",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl Error {
    /// Creates a new error with a kind and a detail message.
    pub fn new<D: Into<Cow<'static, str>>>(kind: ErrorKind, detail: D) -> Error {
        Error {
            kind,
            detail: Some(detail.into()),
            source: None,
        }
    }

    /// Attaches the underlying cause to the error.
    #[must_use]
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Error {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the detail message if one was set.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            detail: None,
            source: None,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("detail", &self.detail)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn std::error::Error + 'static))
    }
}
