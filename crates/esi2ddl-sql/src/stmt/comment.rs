use super::{Name, Statement};

use esi2ddl_core::schema::db::Table;

/// `COMMENT ON ... IS '...'`
#[derive(Debug, Clone)]
pub struct Comment {
    pub target: CommentTarget,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum CommentTarget {
    Table(Name),
    Column(Name),
}

impl Statement {
    /// Comments carrying the table's and its columns' descriptions. Objects
    /// without a description get none.
    pub fn comments(table: &Table) -> Vec<Statement> {
        let table_comment = table.description.as_ref().map(|text| Comment {
            target: CommentTarget::Table(Name::table(table)),
            text: text.clone(),
        });

        let column_comments = table.columns.iter().filter_map(|column| {
            let text = column.description.as_ref()?;

            Some(Comment {
                target: CommentTarget::Column(Name::column(table, &column.name)),
                text: text.clone(),
            })
        });

        table_comment
            .into_iter()
            .chain(column_comments)
            .map(Statement::from)
            .collect()
    }
}

impl From<Comment> for Statement {
    fn from(value: Comment) -> Self {
        Self::Comment(value)
    }
}
