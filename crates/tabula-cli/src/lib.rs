//! Command-line front end over the mapping engine.
//!
//! Built as a library for custom tools: the binary owns the connection
//! and the record registry, constructs a [`TabulaCli`], and hands it
//! the process arguments.
//!
//! ```no_run
//! # fn records() -> tabula::Registry { tabula::Registry::new() }
//! fn main() -> anyhow::Result<()> {
//!     let db = tabula_driver_sqlite::Sqlite::open("app.db")?;
//!     TabulaCli::new(Box::new(db))
//!         .with_registry(records())
//!         .parse_and_run()
//! }
//! # use tabula_cli::TabulaCli;
//! ```

mod config;
pub use config::Config;

mod create_table;
pub use create_table::CreateTableCommand;

mod describe;
pub use describe::DescribeCommand;

mod drop_table;
pub use drop_table::DropTableCommand;

mod generate;
pub use generate::GenerateCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tabula::{Connection, Registry};

pub struct TabulaCli {
    connection: Box<dyn Connection>,
    registry: Registry,
    config: Config,
}

impl TabulaCli {
    /// Creates a CLI over the given connection, with no registered
    /// records and the default configuration.
    pub fn new(connection: Box<dyn Connection>) -> Self {
        Self {
            connection,
            registry: Registry::new(),
            config: Config::default(),
        }
    }

    /// Sets the record registry used by the DDL commands.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets a custom configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Gets a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses and executes CLI commands from the process arguments.
    pub fn parse_and_run(&self) -> Result<()> {
        self.run(Cli::parse())
    }

    /// Parses and executes CLI commands from an iterator of arguments.
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        self.run(Cli::parse_from(args))
    }

    fn run(&self, cli: Cli) -> Result<()> {
        let connection = self.connection.as_ref();

        match cli.command {
            Command::Describe(cmd) => cmd.run(connection, &self.config),
            Command::CreateTable(cmd) => cmd.run(connection, &self.registry),
            Command::DropTable(cmd) => cmd.run(connection, &self.registry),
            Command::Generate(cmd) => cmd.run(connection, &self.config),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tabula")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe a table's columns and keys
    Describe(DescribeCommand),

    /// Create the table(s) for a registered record
    CreateTable(CreateTableCommand),

    /// Drop the table for a registered record
    DropTable(DropTableCommand),

    /// Generate record source for a table
    Generate(GenerateCommand),
}
