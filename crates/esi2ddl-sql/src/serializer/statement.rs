use super::{Comma, Ident, Literal, Params, ToSql};

use crate::stmt;

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Comment(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let (open, sep, close) = if f.serializer.pretty {
            ("\n    ", ",\n    ", "\n")
        } else {
            ("", ", ", "")
        };

        fmt!(f, open);

        for (index, column) in self.0.columns.iter().enumerate() {
            if index > 0 {
                fmt!(f, sep);
            }
            fmt!(f, column);
        }

        if !self.0.primary_key.is_empty() {
            let pk = Comma(self.0.primary_key.iter().map(Ident));
            fmt!(f, sep "PRIMARY KEY (" pk ")");
        }

        fmt!(f, close);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &self.name;
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::Comment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let (kind, name) = match &self.target {
            stmt::CommentTarget::Table(name) => ("TABLE ", name),
            stmt::CommentTarget::Column(name) => ("COLUMN ", name),
        };

        let text = Literal(&self.text);

        fmt!(f, "COMMENT ON " kind name " IS " text);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let target = &self.target;
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, "INSERT INTO " target " (" columns ") VALUES (");

        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                fmt!(f, ", ");
            }
            let bind = f.params.push(value.as_deref());
            fmt!(f, bind);
        }

        fmt!(f, ")");
    }
}
