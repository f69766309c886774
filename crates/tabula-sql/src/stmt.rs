mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod column_def;
pub use column_def::{ColumnDef, KeyClause};

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod foreign_key;
pub use foreign_key::ForeignKey;

mod name;
pub use name::Name;

#[derive(Debug, Clone)]
pub enum Statement {
    AlterTable(AlterTable),
    CreateTable(CreateTable),
    DropTable(DropTable),
}
