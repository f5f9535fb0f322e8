//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::RestClient;
use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::suppress::SuppressionPolicy;
use crate::table::{BoundTable, Row, TableCatalog};
use crate::tables::builtin_registry;
use futures::StreamExt;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Tables => self.tables(),
            Commands::List {
                table,
                columns,
                limit,
            } => self.list(table, columns.as_deref(), *limit).await,
            Commands::Get { table, key } => self.get(table, key).await,
        }
    }

    /// Load connection config, falling back to defaults
    fn load_config(&self) -> Result<ConnectionConfig> {
        match &self.cli.config {
            Some(path) => ConnectionConfig::from_yaml_file(path),
            None => Ok(ConnectionConfig::default()),
        }
    }

    /// Bind a registered table to a fresh REST client
    fn bind_table(&self, table: &str) -> Result<BoundTable> {
        let config = self.load_config()?;
        let client = Arc::new(RestClient::with_config(config.to_client_config()));
        builtin_registry().bind(table, client, SuppressionPolicy::default())
    }

    fn tables(&self) -> Result<()> {
        let registry = builtin_registry();
        for name in registry.table_names() {
            let Some(def) = registry.table(&name) else {
                continue;
            };
            match self.cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(def)?);
                }
                OutputFormat::Pretty => {
                    println!("{name}: {}", def.description);
                    for column in &def.columns {
                        let marker = if column.hydrated { " (hydrated)" } else { "" };
                        println!("  {} [{}]{marker}", column.name, column.column_type);
                    }
                }
            }
        }
        Ok(())
    }

    async fn list(&self, table: &str, columns: Option<&str>, limit: Option<usize>) -> Result<()> {
        let bound = self.bind_table(table)?;
        let projection = columns.map(|cols| {
            cols.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
        });

        let mut rows = bound.scan(projection);
        let mut printed = 0usize;
        while let Some(row) = rows.next().await {
            self.print_row(&row?)?;
            printed += 1;
            if limit.is_some_and(|max| printed >= max) {
                break;
            }
        }
        Ok(())
    }

    async fn get(&self, table: &str, key: &str) -> Result<()> {
        let bound = self.bind_table(table)?;
        match bound.get(key).await? {
            Some(row) => self.print_row(&row)?,
            None => eprintln!("no row for key '{key}' in table '{table}'"),
        }
        Ok(())
    }

    fn print_row(&self, row: &Row) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(row)?),
            OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(row)?),
        }
        Ok(())
    }
}
