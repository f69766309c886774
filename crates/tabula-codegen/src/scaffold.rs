use crate::fmt::ToSource;
use crate::Formatter;

/// The model of a top-level file: a thin extension of the generated
/// base, written once and never overwritten, so hand-added logic in it
/// survives regeneration.
#[derive(Debug)]
pub(crate) struct ScaffoldFile {
    /// e.g. `Address`
    pub(crate) type_name: String,

    /// e.g. `address`
    pub(crate) module_name: String,

    pub(crate) table_name: String,
}

impl ToSource for &ScaffoldFile {
    fn to_source(self, f: &mut Formatter<'_>) {
        let base = format!("{}Base", self.type_name);

        fmt!(
            f,
            "use super::generated::",
            self.module_name,
            "_base::",
            base,
            ";\n",
            "\n",
            "/// Row type for the `",
            self.table_name,
            "` table.\n",
            "///\n",
            "/// Generated once; add hand-written logic here. The generated\n",
            "/// fields and accessors live on the base and are reachable\n",
            "/// through deref.\n",
            "#[derive(Debug, Default)]\n",
            "pub struct ",
            self.type_name,
            " {\n",
            "    base: ",
            base,
            ",\n",
            "}\n",
            "\n",
            "impl ",
            self.type_name,
            " {\n",
            "    pub fn new() -> Self {\n",
            "        Self::default()\n",
            "    }\n",
            "}\n",
            "\n",
            "impl std::ops::Deref for ",
            self.type_name,
            " {\n",
            "    type Target = ",
            base,
            ";\n",
            "\n",
            "    fn deref(&self) -> &Self::Target {\n",
            "        &self.base\n",
            "    }\n",
            "}\n",
            "\n",
            "impl std::ops::DerefMut for ",
            self.type_name,
            " {\n",
            "    fn deref_mut(&mut self) -> &mut Self::Target {\n",
            "        &mut self.base\n",
            "    }\n",
            "}\n",
        );
    }
}
