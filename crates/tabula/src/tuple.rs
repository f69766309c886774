//! Fixed-arity projection of positional query results.
//!
//! Each tuple type binds a cursor's columns positionally onto its typed
//! slots. The column count must equal the arity exactly — checked
//! before any row is read — and slot conversion is the strict,
//! coercion-free [`FromValue`] contract: a witness/actual mismatch
//! fails at the binding site, not inside this layer.

use tabula_core::{Connection, Error, FromValue, Result, Rows, Value};

fn check_arity(rows: &Rows, expected: usize) -> Result<()> {
    if rows.column_count() != expected {
        return Err(Error::arity_mismatch(expected, rows.column_count()));
    }
    Ok(())
}

macro_rules! tuple_projection {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal, $( ($t:ident, $var:ident, $idx:tt) ),+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name<$($t),+>( $(pub $t),+ );

        impl<$($t: FromValue),+> $name<$($t),+> {
            /// Binds a cursor expected to produce at most one row.
            ///
            /// Zero rows yields `None`; more than one row is an error.
            pub fn select_one(rows: Rows) -> Result<Option<Self>> {
                check_arity(&rows, $arity)?;

                let mut rows = rows.into_rows();
                let Some(row) = rows.next() else {
                    return Ok(None);
                };
                if rows.next().is_some() {
                    return Err(Error::too_many_rows(concat!(
                        "query bound to ",
                        stringify!($name),
                        " produced more than one row"
                    )));
                }

                Self::bind(row).map(Some)
            }

            /// Binds every row of the cursor, preserving row order. Zero
            /// rows yields an empty list.
            pub fn select_all(rows: Rows) -> Result<Vec<Self>> {
                check_arity(&rows, $arity)?;
                rows.into_rows().map(Self::bind).collect()
            }

            /// Runs `sql` and binds its single row, if any.
            pub fn query_one(connection: &dyn Connection, sql: &str) -> Result<Option<Self>> {
                Self::select_one(connection.query(sql)?)
            }

            /// Runs `sql` and binds every row.
            pub fn query_all(connection: &dyn Connection, sql: &str) -> Result<Vec<Self>> {
                Self::select_all(connection.query(sql)?)
            }

            fn bind(mut row: Vec<Value>) -> Result<Self> {
                $( let $var = <$t>::from_value(std::mem::take(&mut row[$idx]))?; )+
                Ok(Self($($var),+))
            }
        }
    };
}

tuple_projection!(
    /// A two-column row.
    Tuple2, 2, (T1, v1, 0), (T2, v2, 1)
);
tuple_projection!(
    /// A three-column row.
    Tuple3, 3, (T1, v1, 0), (T2, v2, 1), (T3, v3, 2)
);
tuple_projection!(
    /// A four-column row.
    Tuple4, 4, (T1, v1, 0), (T2, v2, 1), (T3, v3, 2), (T4, v4, 3)
);
tuple_projection!(
    /// A five-column row.
    Tuple5, 5, (T1, v1, 0), (T2, v2, 1), (T3, v3, 2), (T4, v4, 3), (T5, v5, 4)
);
tuple_projection!(
    /// A six-column row.
    Tuple6, 6, (T1, v1, 0), (T2, v2, 1), (T3, v3, 2), (T4, v4, 3), (T5, v5, 4), (T6, v6, 5)
);
tuple_projection!(
    /// A seven-column row.
    Tuple7, 7, (T1, v1, 0), (T2, v2, 1), (T3, v3, 2), (T4, v4, 3), (T5, v5, 4), (T6, v6, 5),
    (T7, v7, 6)
);
