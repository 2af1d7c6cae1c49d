//! `tablesmith` command-line interface.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tablesmith::{
    DatabaseGateway, DryRunGateway, JsonFileStore, MySqlGateway, SchemaManager, Settings,
};

#[derive(Parser)]
#[command(name = "tablesmith")]
#[command(about = "Compile table descriptions into CREATE TABLE statements and apply them")]
#[command(version)]
struct Cli {
    /// Database connection URL (overrides settings)
    #[arg(long)]
    database_url: Option<String>,

    /// Directory holding `<table>.json` descriptions (overrides settings)
    #[arg(long)]
    structures_dir: Option<PathBuf>,

    /// Print statements instead of executing them
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CREATE TABLE statement for a stored description
    Sql { table: String },

    /// Print a stored description
    Show { table: String },

    /// Create a database if it does not exist
    CreateDatabase { name: String },

    /// Drop a database if it exists
    DropDatabase { name: String },

    /// Create a table from its stored description
    CreateTable {
        table: String,

        /// Database to create the table in
        #[arg(long)]
        database: String,
    },

    /// Drop a table
    DropTable { table: String },
}

impl Commands {
    fn needs_database(&self) -> bool {
        !matches!(self, Commands::Sql { .. } | Commands::Show { .. })
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    let store = JsonFileStore::new(
        cli.structures_dir
            .clone()
            .unwrap_or_else(|| settings.structures_dir.clone()),
    );

    if cli.dry_run || !cli.command.needs_database() {
        let manager = SchemaManager::new(store, DryRunGateway::new());
        return dispatch(&manager, cli.command).await;
    }

    let url = cli.database_url.unwrap_or_else(|| settings.database.url());
    let gateway = MySqlGateway::connect(&url)
        .await
        .context("connecting to database")?;
    let manager = SchemaManager::new(store, gateway);
    let result = dispatch(&manager, cli.command).await;
    manager.gateway().close().await;
    result
}

async fn dispatch<G: DatabaseGateway>(
    manager: &SchemaManager<JsonFileStore, G>,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Sql { table } => println!("{}", manager.table_sql(&table)?),
        Commands::Show { table } => println!("{}", manager.describe_table(&table)?),
        Commands::CreateDatabase { name } => manager.create_database(&name).await?,
        Commands::DropDatabase { name } => manager.drop_database(&name).await?,
        Commands::CreateTable { table, database } => {
            manager.create_table(&table, &database).await?
        }
        Commands::DropTable { table } => manager.drop_table(&table).await?,
    }
    Ok(())
}
