use super::{Formatter, ToSql};

use crate::stmt::{Name, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::AlterTable(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.0);
    }
}
