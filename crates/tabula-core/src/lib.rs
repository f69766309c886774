pub mod driver;
pub use driver::{Connection, Rows};

mod error;
pub use error::Error;

pub mod schema;

pub mod value;
pub use value::{FromValue, Value};

/// A Result type alias that uses tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
