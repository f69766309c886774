use crate::Config;

use anyhow::Result;
use clap::Parser;
use console::style;
use tabula::{describe_table, Connection};

#[derive(Parser, Debug)]
pub struct DescribeCommand {
    /// Table to describe
    table: String,
}

impl DescribeCommand {
    pub(crate) fn run(&self, connection: &dyn Connection, config: &Config) -> Result<()> {
        let table = describe_table(connection, &self.table, config.schema.as_deref())?;

        println!();
        println!("  {}", style(&table.table_name).cyan().bold().underlined());
        println!();

        if table.columns.is_empty() {
            println!("  {}", style("no such table").magenta().dim());
            println!();
            return Ok(());
        }

        for column in &table.columns {
            let ty = if column.size > 0 {
                format!("{}({})", column.sql_type, column.size)
            } else {
                column.sql_type.clone()
            };

            let mut markers = vec![];
            if column.primary_key {
                markers.push("PK".to_owned());
            }
            if let (Some(table), Some(referenced)) =
                (&column.referenced_table, &column.referenced_column)
            {
                markers.push(format!("FK -> {table}({referenced})"));
            }
            if !column.nullable {
                markers.push("NOT NULL".to_owned());
            }

            println!(
                "  {:<24} {:<16} {}",
                column.name,
                ty,
                style(markers.join(", ")).dim()
            );
        }
        println!();

        Ok(())
    }
}
