use super::Error;

/// Error when the API document lacks an element the derivation cannot do
/// without.
///
/// This occurs when:
/// - The document has no `paths` object
/// - A GET operation has no `operationId`
/// - Two GET operations share the same `operationId`
/// - `info.version` is missing
/// - A response schema definition contains itself
#[derive(Debug)]
pub(super) struct InvalidDocument {
    message: Box<str>,
}

impl std::error::Error for InvalidDocument {}

impl core::fmt::Display for InvalidDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid document: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDocument(InvalidDocument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid document error.
    pub fn is_invalid_document(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidDocument(_)))
    }
}
