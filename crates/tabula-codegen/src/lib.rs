//! Source generation from introspected table descriptions.
//!
//! [`Generator`] walks a [`TableDescription`] plus caller-supplied
//! relationship directives and writes two files under an output root:
//! a base declaration in `generated/` (always rewritten) and a thin
//! top-level extension next to it (written once, never overwritten).
//!
//! The caller's parent module is expected to declare `pub mod
//! generated;` plus one `mod` per top-level type; the generated files
//! reference each other through relative `super` paths only.

#[macro_use]
mod fmt;
use fmt::ToSource;

mod base;
use base::{BaseFile, Member, MemberKind, RustTy};

mod imports;
use imports::ImportSet;

mod scaffold;
use scaffold::ScaffoldFile;

use tabula_core::schema::app::FieldType;
use tabula_core::schema::db::TableDescription;
use tabula_core::schema::Name;
use tabula_core::Result;

use std::fs;
use std::path::{Path, PathBuf};

struct Formatter<'a> {
    /// Where to write the generated source
    dst: &'a mut String,
}

/// A relationship directive supplied to the generator: the target type,
/// the join column, the referenced column, and the generated field
/// name.
#[derive(Debug, Clone)]
pub struct RelationDirective {
    pub target: String,
    pub column: String,
    pub references: String,
    pub field: String,
}

/// Paths produced by one generation run.
#[derive(Debug)]
pub struct GeneratedFiles {
    /// The base file under `generated/`, always rewritten.
    pub base: PathBuf,

    /// The top-level file; `top_level_written` is false when it already
    /// existed and was left untouched.
    pub top_level: PathBuf,
    pub top_level_written: bool,
}

/// Generates record source from a table description.
///
/// Relationship directives cannot be discovered from a single table's
/// column list (the "many" side lives on the child table), so the
/// caller supplies them, in the manner of the original generation
/// entry point.
#[derive(Debug, Default)]
pub struct Generator {
    type_name: Option<String>,
    foreign_keys: Vec<String>,
    has_ones: Vec<RelationDirective>,
    has_manys: Vec<RelationDirective>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the generated type name; defaults to the table name in
    /// UpperCamelCase.
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Marks a column as the join column of a relationship owned by
    /// another record. The field is still generated, documented as
    /// managed by the owning side.
    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_keys.push(column.into());
        self
    }

    /// Declares a one-to-one relationship. The named column is
    /// suppressed from plain-field generation; a relation field of the
    /// target type takes its place.
    pub fn has_one(
        mut self,
        target: impl Into<String>,
        column: impl Into<String>,
        references: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        self.has_ones.push(RelationDirective {
            target: target.into(),
            column: column.into(),
            references: references.into(),
            field: field.into(),
        });
        self
    }

    /// Declares a one-to-many relationship, generating a list-typed
    /// field of the target type.
    pub fn has_many(
        mut self,
        target: impl Into<String>,
        column: impl Into<String>,
        references: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        self.has_manys.push(RelationDirective {
            target: target.into(),
            column: column.into(),
            references: references.into(),
            field: field.into(),
        });
        self
    }

    /// Generates the base and top-level files for `table` under
    /// `out_root`.
    pub fn generate(
        &self,
        table: &TableDescription,
        out_root: impl AsRef<Path>,
    ) -> Result<GeneratedFiles> {
        let out_root = out_root.as_ref();

        let type_name = match &self.type_name {
            Some(type_name) => type_name.clone(),
            None => Name::new(&table.table_name).upper_camel_case(),
        };
        let module_name = Name::new(&type_name).snake_case();

        let mut imports = ImportSet::default();
        let base_file = self.base_file(table, &type_name, &mut imports)?;

        let mut source = imports.render();
        let mut f = Formatter { dst: &mut source };
        (&base_file).to_source(&mut f);

        let generated_dir = out_root.join("generated");
        // Tolerates the directory already existing, concurrent creation
        // included.
        fs::create_dir_all(&generated_dir)?;

        let base_path = generated_dir.join(format!("{module_name}_base.rs"));
        fs::write(&base_path, source)?;
        tracing::debug!(path = %base_path.display(), "wrote generated base");

        ensure_module_declared(&generated_dir.join("mod.rs"), &format!("{module_name}_base"))?;

        let scaffold = ScaffoldFile {
            type_name,
            module_name: module_name.clone(),
            table_name: table.table_name.clone(),
        };
        let top_level_path = out_root.join(format!("{module_name}.rs"));
        let top_level_written = if top_level_path.exists() {
            false
        } else {
            let mut source = String::new();
            let mut f = Formatter { dst: &mut source };
            (&scaffold).to_source(&mut f);
            fs::write(&top_level_path, source)?;
            tracing::debug!(path = %top_level_path.display(), "wrote top-level scaffold");
            true
        };

        Ok(GeneratedFiles {
            base: base_path,
            top_level: top_level_path,
            top_level_written,
        })
    }

    fn base_file(
        &self,
        table: &TableDescription,
        type_name: &str,
        imports: &mut ImportSet,
    ) -> Result<BaseFile> {
        let mut members = vec![];

        for column in &table.columns {
            // A column claimed by a one-to-one directive is represented
            // by the relation field instead.
            if self.has_ones.iter().any(|d| d.column == column.name) {
                continue;
            }

            let ty = rust_ty(&FieldType::from_sql_type(&column.sql_type)?);
            match ty {
                RustTy::Date => imports.add("jiff::civil::Date"),
                RustTy::DateTime => imports.add("jiff::civil::DateTime"),
                _ => {}
            }

            let name = Name::new(&column.name).snake_case();
            let join_column = self.foreign_keys.contains(&name);

            members.push(Member {
                name,
                kind: MemberKind::Scalar {
                    ty,
                    nullable: column.nullable && !column.primary_key,
                    auto_key: column.primary_key,
                    join_column,
                },
            });
        }

        for directive in &self.has_ones {
            members.push(Member {
                name: Name::new(&directive.field).snake_case(),
                kind: MemberKind::HasOne {
                    target: self.import_target(&directive.target, imports),
                },
            });
        }

        for directive in &self.has_manys {
            members.push(Member {
                name: Name::new(&directive.field).snake_case(),
                kind: MemberKind::HasMany {
                    target: self.import_target(&directive.target, imports),
                },
            });
        }

        Ok(BaseFile {
            type_name: format!("{type_name}Base"),
            table_name: table.table_name.clone(),
            members,
        })
    }

    fn import_target(&self, target: &str, imports: &mut ImportSet) -> String {
        let name = Name::new(target);
        imports.add(format!(
            "super::super::{}::{}",
            name.snake_case(),
            name.upper_camel_case()
        ));
        name.upper_camel_case()
    }
}

/// Maps a field type onto the Rust type token generated for it.
fn rust_ty(ty: &FieldType) -> RustTy {
    match ty {
        FieldType::I32 => RustTy::I32,
        FieldType::I64 => RustTy::I64,
        FieldType::F32 => RustTy::F32,
        FieldType::F64 => RustTy::F64,
        FieldType::String => RustTy::String,
        FieldType::Date => RustTy::Date,
        FieldType::DateTime => RustTy::DateTime,
        // Introspected columns never carry enum types; ordinal storage
        // reads back as an integer column.
        FieldType::Enum(_) => RustTy::I32,
    }
}

/// Ensures `mod_rs` declares `pub mod <module>;`, creating or extending
/// the file as needed. Declarations are kept sorted.
fn ensure_module_declared(mod_rs: &Path, module: &str) -> Result<()> {
    let declaration = format!("pub mod {module};");

    let existing = match fs::read_to_string(mod_rs) {
        Ok(existing) => existing,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    if existing.lines().any(|line| line.trim() == declaration) {
        return Ok(());
    }

    let mut declarations: Vec<&str> = existing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    declarations.push(&declaration);
    declarations.sort_unstable();

    let mut out = String::new();
    for declaration in declarations {
        out.push_str(declaration);
        out.push('\n');
    }

    fs::write(mod_rs, out)?;
    Ok(())
}
