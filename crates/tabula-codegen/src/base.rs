use crate::fmt::ToSource;
use crate::Formatter;

/// The model of one generated base file: a struct of private fields
/// plus an accessor pair per member, in declaration order (plain
/// columns first, then one-to-one relations, then one-to-many
/// relations — mirroring the column walk).
#[derive(Debug)]
pub(crate) struct BaseFile {
    /// e.g. `AddressBase`
    pub(crate) type_name: String,

    /// The introspected table, named in the type's doc comment.
    pub(crate) table_name: String,

    pub(crate) members: Vec<Member>,
}

#[derive(Debug)]
pub(crate) struct Member {
    /// Field and accessor name, in snake_case.
    pub(crate) name: String,

    pub(crate) kind: MemberKind,
}

#[derive(Debug)]
pub(crate) enum MemberKind {
    Scalar {
        ty: RustTy,
        nullable: bool,
        /// Primary-key columns carry the auto-generation marker.
        auto_key: bool,
        /// Join columns managed by an owning record's relation.
        join_column: bool,
    },
    HasOne {
        /// Target type name, e.g. `Address`.
        target: String,
    },
    HasMany {
        target: String,
    },
}

/// The Rust types generated fields can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RustTy {
    I32,
    I64,
    F32,
    F64,
    String,
    Date,
    DateTime,
}

impl RustTy {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
        }
    }

    /// Copy types are returned by value from getters; `String` is
    /// borrowed as `&str`.
    fn is_copy(self) -> bool {
        !matches!(self, Self::String)
    }
}

impl ToSource for &BaseFile {
    fn to_source(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "/// Generated base for rows of the `",
            self.table_name,
            "` table.\n",
            "///\n",
            "/// Regenerated on every run; do not edit. Hand-written logic\n",
            "/// belongs on the top-level type.\n",
            "#[derive(Debug, Default)]\n",
            "pub struct ",
            self.type_name,
            " {\n",
        );

        for member in &self.members {
            member.field_to_source(f);
        }

        fmt!(f, "}\n\nimpl ", self.type_name, " {\n");

        let mut s = "";
        for member in &self.members {
            fmt!(f, s);
            member.accessors_to_source(f);
            s = "\n";
        }

        fmt!(f, "}\n");
    }
}

impl Member {
    fn field_to_source(&self, f: &mut Formatter<'_>) {
        match &self.kind {
            MemberKind::Scalar {
                ty,
                nullable,
                auto_key,
                join_column,
            } => {
                if *auto_key {
                    fmt!(f, "    /// Auto-generated primary key.\n");
                }
                if *join_column {
                    fmt!(f, "    /// Join column managed by the owning record.\n");
                }
                fmt!(f, "    ", self.name, ": ");
                if *nullable {
                    fmt!(f, "Option<", ty.token(), ">");
                } else {
                    fmt!(f, ty.token());
                }
                fmt!(f, ",\n");
            }
            MemberKind::HasOne { target } => {
                fmt!(f, "    ", self.name, ": Option<", target, ">,\n");
            }
            MemberKind::HasMany { target } => {
                fmt!(f, "    ", self.name, ": Vec<", target, ">,\n");
            }
        }
    }

    fn accessors_to_source(&self, f: &mut Formatter<'_>) {
        match &self.kind {
            MemberKind::Scalar { ty, nullable, .. } => {
                self.scalar_accessors_to_source(f, *ty, *nullable)
            }
            MemberKind::HasOne { target } => {
                fmt!(
                    f,
                    "    pub fn ",
                    self.name,
                    "(&self) -> Option<&",
                    target,
                    "> {\n",
                    "        self.",
                    self.name,
                    ".as_ref()\n",
                    "    }\n",
                    "\n",
                    "    pub fn set_",
                    self.name,
                    "(&mut self, ",
                    self.name,
                    ": Option<",
                    target,
                    ">) {\n",
                    "        self.",
                    self.name,
                    " = ",
                    self.name,
                    ";\n",
                    "    }\n",
                );
            }
            MemberKind::HasMany { target } => {
                fmt!(
                    f,
                    "    pub fn ",
                    self.name,
                    "(&self) -> &[",
                    target,
                    "] {\n",
                    "        &self.",
                    self.name,
                    "\n",
                    "    }\n",
                    "\n",
                    "    /// Replaces the contents of the collection, preserving its\n",
                    "    /// identity.\n",
                    "    pub fn set_",
                    self.name,
                    "(&mut self, ",
                    self.name,
                    ": Vec<",
                    target,
                    ">) {\n",
                    "        self.",
                    self.name,
                    ".clear();\n",
                    "        self.",
                    self.name,
                    ".extend(",
                    self.name,
                    ");\n",
                    "    }\n",
                );
            }
        }
    }

    fn scalar_accessors_to_source(&self, f: &mut Formatter<'_>, ty: RustTy, nullable: bool) {
        // Getter
        fmt!(f, "    pub fn ", self.name, "(&self) -> ");
        match (ty.is_copy(), nullable) {
            (true, false) => {
                fmt!(f, ty.token(), " {\n        self.", self.name, "\n");
            }
            (true, true) => {
                fmt!(f, "Option<", ty.token(), "> {\n        self.", self.name, "\n");
            }
            (false, false) => {
                fmt!(f, "&str {\n        &self.", self.name, "\n");
            }
            (false, true) => {
                fmt!(f, "Option<&str> {\n        self.", self.name, ".as_deref()\n");
            }
        }
        fmt!(f, "    }\n\n");

        // Setter
        fmt!(f, "    pub fn set_", self.name, "(&mut self, ", self.name, ": ");
        if nullable {
            fmt!(f, "Option<", ty.token(), ">");
        } else {
            fmt!(f, ty.token());
        }
        fmt!(f, ") {\n        self.", self.name, " = ", self.name, ";\n    }\n");
    }
}
