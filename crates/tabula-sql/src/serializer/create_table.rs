use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CREATE TABLE ", self.name, " (\n");

        let mut s = "";
        for column in &self.columns {
            fmt!(f, s, "\t", column);
            s = ",\n";
        }
        for foreign_key in &self.foreign_keys {
            fmt!(f, s, "\t", foreign_key);
            s = ",\n";
        }

        fmt!(f, "\n);\n");
    }
}
