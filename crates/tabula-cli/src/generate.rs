use crate::Config;

use anyhow::Result;
use clap::Parser;
use console::style;
use tabula::codegen::Generator;
use tabula::{describe_table, Connection};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Table to generate a record for
    table: String,

    /// Override the generated type name
    #[arg(long)]
    type_name: Option<String>,

    /// Join column managed by an owning record (repeatable)
    #[arg(long = "foreign-key", value_name = "COLUMN")]
    foreign_keys: Vec<String>,

    /// One-to-one relationship, as `target:column:references:field`
    /// (repeatable)
    #[arg(long = "has-one", value_name = "SPEC", value_parser = parse_relation)]
    has_ones: Vec<RelationArg>,

    /// One-to-many relationship, as `target:column:references:field`
    /// (repeatable)
    #[arg(long = "has-many", value_name = "SPEC", value_parser = parse_relation)]
    has_manys: Vec<RelationArg>,
}

#[derive(Debug, Clone)]
pub(crate) struct RelationArg {
    target: String,
    column: String,
    references: String,
    field: String,
}

fn parse_relation(spec: &str) -> Result<RelationArg, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[..] {
        [target, column, references, field] => Ok(RelationArg {
            target: target.to_owned(),
            column: column.to_owned(),
            references: references.to_owned(),
            field: field.to_owned(),
        }),
        _ => Err(format!(
            "expected target:column:references:field, got `{spec}`"
        )),
    }
}

impl GenerateCommand {
    pub(crate) fn run(&self, connection: &dyn Connection, config: &Config) -> Result<()> {
        let table = describe_table(connection, &self.table, config.schema.as_deref())?;

        let mut generator = Generator::new();
        if let Some(type_name) = &self.type_name {
            generator = generator.type_name(type_name);
        }
        for column in &self.foreign_keys {
            generator = generator.foreign_key(column);
        }
        for relation in &self.has_ones {
            generator = generator.has_one(
                &relation.target,
                &relation.column,
                &relation.references,
                &relation.field,
            );
        }
        for relation in &self.has_manys {
            generator = generator.has_many(
                &relation.target,
                &relation.column,
                &relation.references,
                &relation.field,
            );
        }

        let files = generator.generate(&table, &config.output_root)?;

        println!();
        println!("  {} {}", style("wrote").green(), files.base.display());
        if files.top_level_written {
            println!("  {} {}", style("wrote").green(), files.top_level.display());
        } else {
            println!(
                "  {} {}",
                style("kept").magenta().dim(),
                files.top_level.display()
            );
        }
        println!();

        Ok(())
    }
}
