use anyhow::{anyhow, Result};
use clap::Parser;
use tabula::{Connection, Ddl, Registry};

#[derive(Parser, Debug)]
pub struct CreateTableCommand {
    /// Registered record type name
    record: String,

    /// Synthesize the statements without executing them
    #[arg(long)]
    dry_run: bool,
}

impl CreateTableCommand {
    pub(crate) fn run(&self, connection: &dyn Connection, registry: &Registry) -> Result<()> {
        let record = registry
            .get(&self.record)
            .ok_or_else(|| anyhow!("unknown record type: {}", self.record))?;

        let sql = Ddl::new(connection).create_table(record, !self.dry_run)?;
        print!("{sql}");

        Ok(())
    }
}
