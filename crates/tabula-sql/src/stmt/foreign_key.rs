/// A foreign-key clause: `FOREIGN KEY(<column>) REFERENCES
/// <table>(<references>)`.
///
/// Appears inline in a CREATE TABLE for one-to-one join columns, and as
/// the action of a deferred ALTER TABLE for one-to-many wiring.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    /// Constrained column on the owning table.
    pub column: String,

    /// Referenced table.
    pub table: String,

    /// Referenced column.
    pub references: String,
}
