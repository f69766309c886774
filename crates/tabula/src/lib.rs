//! Bidirectional mapping between relational table schemas and declared
//! record types.
//!
//! One direction reads a live database's structural metadata and emits
//! record source declarations ([`describe_table`] +
//! [`codegen::Generator`]); the other walks a declared
//! [`Record`](schema::app::Record) and synthesizes the DDL for its
//! table(s) ([`Ddl`]). [`tuple`] projects positional query results onto
//! fixed-arity typed tuples.

pub mod cache;
pub use cache::QueryCache;

mod describe;
pub use describe::{describe_table, table_exists};

pub mod ddl;
pub use ddl::Ddl;

mod registry;
pub use registry::Registry;

pub mod tuple;
pub use tuple::{Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7};

pub use tabula_core::{driver, schema, Connection, Error, FromValue, Result, Rows, Value};

pub use tabula_codegen as codegen;
pub use tabula_sql as sql;
