use esi2ddl_core::schema::db::{self, Column};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,
    pub not_null: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.ty.clone(),
            not_null: !column.nullable,
        }
    }
}
