#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeErrorKind {
    /// The key is not present in the dataset. Recoverable.
    NotFound,
    /// The key was required to be present (`get_or_fail`).
    KeyMissing,
    /// A dataset entry breaks the key/description invariants.
    InvalidEntry,
    /// The same key appears twice in an injected dataset.
    DuplicateEntry,
    /// Serialized dataset could not be decoded.
    InvalidData,
}

#[derive(Debug, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct MimeError {
    kind: MimeErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MimeError {
    pub fn new(kind: MimeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: MimeErrorKind,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Miss on an exact lookup. The message embeds the input verbatim.
    pub fn not_found(mime_type: &str) -> Self {
        Self::new(MimeErrorKind::NotFound, format!("MIME type not found: {:?}", mime_type))
    }

    pub fn key_missing(mime_type: &str) -> Self {
        Self::new(MimeErrorKind::KeyMissing, format!("MIME type not found: {:?}", mime_type))
    }

    pub fn kind(&self) -> MimeErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for MimeError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            MimeErrorKind::InvalidData,
            format!("malformed dataset: {}", err),
            Box::new(err),
        )
    }
}

pub type MimeResult<T> = Result<T, MimeError>;
