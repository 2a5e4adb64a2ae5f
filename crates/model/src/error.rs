use thiserror::Error;

/// A wire token that names no variant of the enumeration it was parsed as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token {token:?}")]
pub struct UnknownToken {
    kind: &'static str,
    token: String,
}

impl UnknownToken {
    pub fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    /// Name of the enumeration type.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
