mod column;
pub use column::{ColumnBuilder, ColumnDescription};

mod table;
pub use table::TableDescription;
