use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DROP TABLE ", self.name, ";");
    }
}
