use super::{Formatter, ToSql};

use crate::stmt::{AlterTable, AlterTableAction};

impl ToSql for &AlterTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.action {
            AlterTableAction::AddForeignKey(foreign_key) => {
                fmt!(f, "ALTER TABLE ", self.name, " ADD ", foreign_key, ";\n");
            }
        }
    }
}
