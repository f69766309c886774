use indexmap::IndexMap;
use tabula_core::schema::app::Record;

/// An ordered collection of record declarations, keyed by record name.
///
/// Registration order is meaningful: batch creation walks it front to
/// back and batch dropping back to front, so parents register before
/// their children.
#[derive(Debug, Default)]
pub struct Registry {
    records: IndexMap<String, Record>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record. Re-registering a name replaces the previous
    /// declaration but keeps its position.
    pub fn register(&mut self, record: Record) {
        self.records
            .insert(record.name.upper_camel_case(), record);
    }

    /// Looks up a record by type name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Records in registration order.
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
