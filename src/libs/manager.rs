use crate::libs::compiler::{StatementKind, compile_statement, compile_table};
use crate::libs::error::Result;
use crate::libs::gateway::DatabaseGateway;
use crate::libs::schema::TableSpec;
use crate::libs::store::{DescriptionStore, to_pretty_json};

/// Wires the description store and a database gateway around the compiler.
///
/// Every operation stops at the first error and returns it.
pub struct SchemaManager<S, G> {
    store: S,
    gateway: G,
}

impl<S, G> SchemaManager<S, G>
where
    S: DescriptionStore,
    G: DatabaseGateway,
{
    pub fn new(store: S, gateway: G) -> Self {
        Self { store, gateway }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // -------- Descriptions --------

    /// Persist a table description.
    pub fn save_table(&self, table: &TableSpec) -> Result<()> {
        self.store.save(&table.name, &table.columns)
    }

    /// Stored description rendered as pretty JSON.
    pub fn describe_table(&self, table_name: &str) -> Result<String> {
        let columns = self.store.load(table_name)?;
        to_pretty_json(&columns)
    }

    /// `CREATE TABLE` statement for a stored description.
    pub fn table_sql(&self, table_name: &str) -> Result<String> {
        let columns = self.store.load(table_name)?;
        let sql = compile_table(table_name, &columns)?;
        log::debug!("Create table statement for {}:\n{}", table_name, sql);
        Ok(sql)
    }

    // -------- Statements --------

    pub async fn create_database(&self, name: &str) -> Result<()> {
        self.run(StatementKind::CreateDatabase, name).await
    }

    pub async fn drop_database(&self, name: &str) -> Result<()> {
        self.run(StatementKind::DropDatabase, name).await
    }

    pub async fn use_database(&self, name: &str) -> Result<()> {
        self.run(StatementKind::Use, name).await
    }

    pub async fn drop_table(&self, name: &str) -> Result<()> {
        self.run(StatementKind::DropTable, name).await
    }

    /// Switch to `database` and create `table_name` from its stored description.
    pub async fn create_table(&self, table_name: &str, database: &str) -> Result<()> {
        self.use_database(database).await?;
        let sql = self.table_sql(table_name)?;
        self.execute(&sql).await
    }

    async fn run(&self, kind: StatementKind, name: &str) -> Result<()> {
        let statement = compile_statement(kind, name);
        self.execute(&statement).await
    }

    async fn execute(&self, statement: &str) -> Result<()> {
        log::info!("Executing statement:\n{}", statement);
        self.gateway.execute(statement).await
    }
}
