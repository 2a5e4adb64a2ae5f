//! Error taxonomy shared by the XML codec and the content dispatch rules.

use thiserror::Error;

/// Errors raised while encoding or decoding AAS elements.
///
/// Every variant that originates inside a document carries the slash-separated
/// element path (`operation/inputVariables/operationVariable`) at which the
/// problem was detected.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is not well-formed, is truncated, or holds an invalid token.
    #[error("malformed input at {path}: {message}")]
    MalformedInput { path: String, message: String },

    /// Polymorphic content could not be dispatched to a known shape.
    #[error("unresolvable content shape at {path}: {reason}")]
    UnresolvableContentShape { path: String, reason: String },

    /// An element the current type does not declare (strict mode only).
    #[error("unknown element <{name}> at {path}")]
    UnknownElement { path: String, name: String },

    /// A value that cannot be written, e.g. a polymorphic item without an element name.
    #[error("cannot encode value at {path}: {message}")]
    Unencodable { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "xml")]
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl CodecError {
    pub fn is_unresolvable_content(&self) -> bool {
        matches!(self, CodecError::UnresolvableContentShape { .. })
    }

    /// Element path the error was raised at, when it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::MalformedInput { path, .. }
            | CodecError::UnresolvableContentShape { path, .. }
            | CodecError::UnknownElement { path, .. }
            | CodecError::Unencodable { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
