use super::{Formatter, Literal, ToSql};

/// Collects the values bound to a statement.
pub trait Params {
    fn push(&mut self, value: Option<&str>) -> Bind;
}

/// How a value appears in the serialized statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
    /// `$n`, 1-based
    Placeholder(usize),

    /// The value itself, as a literal
    Inline(Option<String>),
}

/// Writes values directly into the statement. Used for scripts.
#[derive(Debug, Default)]
pub struct Inline;

impl Params for Vec<Option<String>> {
    fn push(&mut self, value: Option<&str>) -> Bind {
        Vec::push(self, value.map(String::from));
        Bind::Placeholder(self.len())
    }
}

impl Params for Inline {
    fn push(&mut self, value: Option<&str>) -> Bind {
        Bind::Inline(value.map(String::from))
    }
}

impl ToSql for Bind {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match self {
            Bind::Placeholder(n) => {
                let _ = write!(f.dst, "${n}");
            }
            Bind::Inline(Some(value)) => fmt!(f, Literal(value)),
            Bind::Inline(None) => fmt!(f, "NULL"),
        }
    }
}
