#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

mod params;
pub use params::{Bind, Inline, Params};

// Fragment serializers
mod column_def;
mod name;
mod statement;
mod ty;

use crate::stmt::Statement;

/// Serialize a statement to a PostgreSQL string
#[derive(Debug, Default)]
pub struct Serializer {
    /// Break column definitions onto their own lines
    pretty: bool,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer { pretty: false }
    }

    /// Multi-line output, for scripts meant to be read.
    pub fn pretty(mut self) -> Serializer {
        self.pretty = true;
        self
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
