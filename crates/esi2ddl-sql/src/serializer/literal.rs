use super::{Formatter, Params, ToSql};

/// A single-quoted string literal
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('\'');
        for c in self.0.as_ref().chars() {
            if c == '\'' {
                f.dst.push('\'');
            }
            f.dst.push(c);
        }
        f.dst.push('\'');
    }
}
