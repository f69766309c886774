use super::{Formatter, ToSql};

use crate::stmt::{ColumnDef, KeyClause};

impl ToSql for &ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name, " ", self.ty);

        if self.not_null {
            fmt!(f, " NOT NULL");
        }

        match self.key {
            KeyClause::None => {}
            KeyClause::PrimaryKey => fmt!(f, " PRIMARY KEY"),
            KeyClause::AutoIncrementPrimaryKey => fmt!(f, " AUTO_INCREMENT PRIMARY KEY"),
        }
    }
}
