use super::Error;

/// Error when a response schema node has a type the flattener has no rule
/// for.
#[derive(Debug)]
pub(super) struct UnknownModelType {
    ty: Option<Box<str>>,
}

impl std::error::Error for UnknownModelType {}

impl core::fmt::Display for UnknownModelType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "unknown model type: {ty}"),
            None => f.write_str("unknown model type: <none>"),
        }
    }
}

impl Error {
    /// Creates an unknown model type error.
    pub fn unknown_model_type(ty: Option<&str>) -> Error {
        Error::from(super::ErrorKind::UnknownModelType(UnknownModelType {
            ty: ty.map(Into::into),
        }))
    }

    /// Returns `true` if this error is an unknown model type error.
    pub fn is_unknown_model_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnknownModelType(_)))
    }
}
