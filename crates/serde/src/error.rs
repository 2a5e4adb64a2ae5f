#[cfg(feature = "xml")]
use aas_serde_support::CodecError;

/// Error types for AAS serialization and deserialization.
#[derive(Debug)]
pub enum SerdeError {
    /// JSON serialization or deserialization error
    Json(serde_json::Error),

    /// XML encoding or decoding error, with the element path it occurred at
    #[cfg(feature = "xml")]
    Xml(CodecError),

    /// IO error during serialization/deserialization
    Io(std::io::Error),

    /// Custom error message
    Custom(String),
}

impl SerdeError {
    /// The underlying codec error, for XML failures.
    #[cfg(feature = "xml")]
    pub fn as_codec_error(&self) -> Option<&CodecError> {
        match self {
            SerdeError::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::Json(e) => write!(f, "JSON error: {}", e),
            #[cfg(feature = "xml")]
            SerdeError::Xml(e) => write!(f, "XML error: {}", e),
            SerdeError::Io(e) => write!(f, "IO error: {}", e),
            SerdeError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SerdeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerdeError::Json(e) => Some(e),
            #[cfg(feature = "xml")]
            SerdeError::Xml(e) => Some(e),
            SerdeError::Io(e) => Some(e),
            SerdeError::Custom(_) => None,
        }
    }
}

impl From<serde_json::Error> for SerdeError {
    fn from(err: serde_json::Error) -> Self {
        SerdeError::Json(err)
    }
}

#[cfg(feature = "xml")]
impl From<CodecError> for SerdeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(err) => SerdeError::Io(err),
            other => SerdeError::Xml(other),
        }
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Io(err)
    }
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for AAS serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;
