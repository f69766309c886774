use anyhow::{anyhow, Result};
use clap::Parser;
use tabula::{Connection, Ddl, Registry};

#[derive(Parser, Debug)]
pub struct DropTableCommand {
    /// Registered record type name
    record: String,

    /// Synthesize the statement without executing it
    #[arg(long)]
    dry_run: bool,
}

impl DropTableCommand {
    pub(crate) fn run(&self, connection: &dyn Connection, registry: &Registry) -> Result<()> {
        let record = registry
            .get(&self.record)
            .ok_or_else(|| anyhow!("unknown record type: {}", self.record))?;

        let sql = Ddl::new(connection).drop_table(record, !self.dry_run)?;
        println!("{sql}");

        Ok(())
    }
}
