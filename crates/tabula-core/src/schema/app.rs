//! Declared record model.
//!
//! Callers describe their record types explicitly through this builder
//! API — fields, types, size constraints, key and generation markers,
//! and relationship declarations. Nothing here is discovered at
//! runtime; the declaration is the single source of truth for DDL
//! synthesis.

mod auto;
pub use auto::GenerationStrategy;

mod field;
pub use field::{Field, FieldTy};

mod record;
pub use record::{Record, RecordBuilder};

mod relation;
pub use relation::{HasMany, HasOne};

mod ty;
pub use ty::{EnumEncoding, EnumType, FieldType};
