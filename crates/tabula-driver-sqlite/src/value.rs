use rusqlite::types::ValueRef;
use tabula_core::{Error, Result, Value};

/// Maps one sqlite cell onto the cursor value vocabulary.
///
/// Sqlite's storage classes are integer, real, text, blob, and null;
/// dates and times come back as text and stay text here — projection
/// witnesses decide what to do with them. Blobs are outside the
/// supported type set.
pub(crate) fn from_sql(value: ValueRef<'_>) -> Result<Value> {
    match value {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(value) => Ok(Value::I64(value)),
        ValueRef::Real(value) => Ok(Value::F64(value)),
        ValueRef::Text(value) => {
            let text = std::str::from_utf8(value)
                .map_err(|err| Error::connectivity("decode text column", err))?;
            Ok(Value::String(text.into()))
        }
        ValueRef::Blob(_) => Err(Error::unsupported_type("blob")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_classes_map_to_native_variants() {
        assert_eq!(from_sql(ValueRef::Integer(7)).unwrap(), Value::I64(7));
        assert_eq!(from_sql(ValueRef::Real(1.5)).unwrap(), Value::F64(1.5));
        assert_eq!(
            from_sql(ValueRef::Text(b"abc")).unwrap(),
            Value::from("abc")
        );
        assert_eq!(from_sql(ValueRef::Null).unwrap(), Value::Null);
        assert!(from_sql(ValueRef::Blob(&[1])).unwrap_err().is_unsupported_type());
    }
}
