mod column_def;
pub use column_def::ColumnDef;

mod comment;
pub use comment::{Comment, CommentTarget};

mod create_table;
pub use create_table::CreateTable;

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

use esi2ddl_core::schema::db;

#[derive(Debug, Clone)]
pub enum Statement {
    Comment(Comment),
    CreateTable(CreateTable),
    Insert(Insert),
}

impl Statement {
    /// Every statement needed to create the schema's tables, in table order.
    /// Each `CREATE TABLE` is followed by the comments describing it.
    pub fn create_schema(schema: &db::Schema) -> Vec<Statement> {
        let mut stmts = vec![];

        for table in &schema.tables {
            stmts.push(Statement::create_table(table));
            stmts.extend(Statement::comments(table));
        }

        stmts
    }
}
