use super::{Params, ToSql};

use esi2ddl_core::schema::db::Type;

impl ToSql for &Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        use std::fmt::Write;

        match self {
            Type::Boolean => fmt!(f, "BOOLEAN"),
            Type::Integer(1..=4) => fmt!(f, "INTEGER"),
            Type::Integer(_) => fmt!(f, "BIGINT"),
            Type::Float(1..=4) => fmt!(f, "REAL"),
            Type::Float(_) => fmt!(f, "DOUBLE PRECISION"),
            Type::VarChar(size) => {
                let _ = write!(f.dst, "VARCHAR({size})");
            }
            Type::Text => fmt!(f, "TEXT"),
            Type::Date => fmt!(f, "DATE"),
            Type::Timestamp => fmt!(f, "TIMESTAMP"),
        }
    }
}
