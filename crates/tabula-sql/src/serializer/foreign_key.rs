use super::{Formatter, ToSql};

use crate::stmt::ForeignKey;

impl ToSql for &ForeignKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "FOREIGN KEY(",
            self.column,
            ") REFERENCES ",
            self.table,
            "(",
            self.references,
            ")",
        );
    }
}
