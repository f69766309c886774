use indexmap::IndexSet;

/// The `use` lines of a generated file, deduplicated and kept in
/// first-use order. Accumulated once per generation run.
#[derive(Debug, Default)]
pub(crate) struct ImportSet {
    imports: IndexSet<String>,
}

impl ImportSet {
    pub(crate) fn add(&mut self, import: impl Into<String>) {
        self.imports.insert(import.into());
    }

    pub(crate) fn render(&self) -> String {
        if self.imports.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        for import in &self.imports {
            out.push_str("use ");
            out.push_str(import);
            out.push_str(";\n");
        }
        out.push('\n');
        out
    }
}
