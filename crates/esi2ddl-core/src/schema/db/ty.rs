use crate::{Error, Result};

/// Maximum size of a variable-length text column.
pub const VARCHAR_SIZE: u64 = 4000;

/// Database-level storage types.
///
/// `Type` is what appears in `CREATE TABLE` statements. Columns derived from
/// the API document get their type through [`Type::from_json`]; the reserved
/// mapping table picks its types directly.
///
/// ```text
/// string              →  VarChar(4000)
/// string  date        →  Date
/// string  date-time   →  Timestamp
/// integer [int32]     →  Integer(4)
/// integer int64       →  Integer(8)
/// boolean             →  Boolean
/// number  float       →  Float(4)
/// number  double      →  Float(8)
/// array               →  VarChar(4000)   (serialized)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Unconstrained large text
    Text,

    /// A civil date in the Gregorian calendar.
    Date,

    /// An instant in time.
    Timestamp,
}

impl Type {
    /// Maps a JSON schema `type`/`format` pair to a storage type.
    ///
    /// Pairs not listed in the table above are rejected: an unknown pair
    /// means the mapping rules are incomplete, not that the value can be
    /// skipped.
    pub fn from_json(ty: Option<&str>, format: Option<&str>) -> Result<Type> {
        match ty {
            Some("string") => match format {
                None => Ok(Type::VarChar(VARCHAR_SIZE)),
                Some("date") => Ok(Type::Date),
                Some("date-time") => Ok(Type::Timestamp),
                format => Err(Error::unknown_format("string", format)),
            },
            Some("integer") => match format {
                None | Some("int32") => Ok(Type::Integer(4)),
                Some("int64") => Ok(Type::Integer(8)),
                format => Err(Error::unknown_format("integer", format)),
            },
            Some("boolean") => Ok(Type::Boolean),
            Some("number") => match format {
                Some("float") => Ok(Type::Float(4)),
                Some("double") => Ok(Type::Float(8)),
                format => Err(Error::unknown_format("number", format)),
            },
            Some("array") => Ok(Type::VarChar(VARCHAR_SIZE)),
            ty => Err(Error::unknown_type(ty)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs() {
        let cases = [
            (Some("string"), None, Type::VarChar(VARCHAR_SIZE)),
            (Some("string"), Some("date"), Type::Date),
            (Some("string"), Some("date-time"), Type::Timestamp),
            (Some("integer"), None, Type::Integer(4)),
            (Some("integer"), Some("int32"), Type::Integer(4)),
            (Some("integer"), Some("int64"), Type::Integer(8)),
            (Some("boolean"), None, Type::Boolean),
            (Some("number"), Some("float"), Type::Float(4)),
            (Some("number"), Some("double"), Type::Float(8)),
            (Some("array"), None, Type::VarChar(VARCHAR_SIZE)),
        ];

        for (ty, format, expect) in cases {
            assert_eq!(Type::from_json(ty, format).unwrap(), expect, "{ty:?}/{format:?}");
        }
    }

    #[test]
    fn unknown_format() {
        let err = Type::from_json(Some("string"), Some("unknown")).unwrap_err();
        assert!(err.is_unknown_type());
        assert_eq!(err.to_string(), "unknown format: unknown, type: string");
    }

    #[test]
    fn number_requires_format() {
        let err = Type::from_json(Some("number"), None).unwrap_err();
        assert_eq!(err.to_string(), "unknown format: <none>, type: number");
    }

    #[test]
    fn unknown_type() {
        let err = Type::from_json(Some("object"), None).unwrap_err();
        assert_eq!(err.to_string(), "unknown type: object");

        let err = Type::from_json(None, None).unwrap_err();
        assert_eq!(err.to_string(), "unknown type: <none>");
    }
}
