//! DDL synthesis for declared records.
//!
//! [`stmt`] models CREATE/ALTER/DROP statements and knows how to build
//! them from a [`Record`](tabula_core::schema::app::Record);
//! [`Serializer`] renders them to SQL text. [`create_table_sql`] and
//! [`drop_table_sql`] assemble the full text for one record, CREATE
//! first and deferred ALTERs after.

mod ddl;
pub use ddl::{create_statements, create_table_sql, drop_statement, drop_table_sql};

mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
