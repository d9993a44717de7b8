use super::Error;

/// Error when a JSON schema `type`/`format` pair has no database type.
#[derive(Debug)]
pub(super) struct UnknownType {
    ty: Option<Box<str>>,

    /// Set when the type is known but its format is not.
    format: Option<Option<Box<str>>>,
}

impl std::error::Error for UnknownType {}

impl core::fmt::Display for UnknownType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let ty = self.ty.as_deref().unwrap_or("<none>");

        match &self.format {
            Some(format) => write!(
                f,
                "unknown format: {}, type: {ty}",
                format.as_deref().unwrap_or("<none>")
            ),
            None => write!(f, "unknown type: {ty}"),
        }
    }
}

impl Error {
    /// Creates an unknown type error.
    pub fn unknown_type(ty: Option<&str>) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownType {
            ty: ty.map(Into::into),
            format: None,
        }))
    }

    /// Creates an unknown format error for an otherwise known type.
    pub fn unknown_format(ty: &str, format: Option<&str>) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownType {
            ty: Some(ty.into()),
            format: Some(format.map(Into::into)),
        }))
    }

    /// Returns `true` if this error is an unknown type or unknown format
    /// error.
    pub fn is_unknown_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnknownType(_)))
    }
}
