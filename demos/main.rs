use tablesmith::*;

fn role_table() -> TableSpec {
    TableSpec::new(
        "roles",
        vec![
            ColumnSpec::new("role_id", ValueType::Int).primary_key().auto_increment(),
            ColumnSpec::new("role_name", ValueType::Varchar).unique(),
            ColumnSpec::new("created_at", ValueType::DateTime),
            ColumnSpec::new("updated_at", ValueType::DateTime),
        ],
    )
}

fn user_table() -> TableSpec {
    TableSpec::new(
        "users",
        vec![
            ColumnSpec::new("user_id", ValueType::Int).primary_key().auto_increment(),
            ColumnSpec::new("username", ValueType::Varchar).unique(),
            ColumnSpec::new("email", ValueType::Varchar).unique(),
            ColumnSpec::new("created_at", ValueType::DateTime),
            ColumnSpec::new("updated_at", ValueType::DateTime),
            ColumnSpec::new("role_id", ValueType::Int).references("roles", "role_id"),
        ],
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    let gateway = MySqlGateway::connect(&settings.database.url()).await?;
    let manager = SchemaManager::new(JsonFileStore::new(&settings.structures_dir), gateway);

    let roles = role_table();
    let users = user_table();
    manager.save_table(&roles)?;
    manager.save_table(&users)?;

    manager.create_database("test_db_1").await?;
    manager.create_table(&roles.name, "test_db_1").await?;
    manager.create_table(&users.name, "test_db_1").await?;

    for table in [&roles, &users] {
        println!("{}", manager.describe_table(&table.name)?);
        println!("{}", manager.table_sql(&table.name)?);
    }

    manager.drop_table(&users.name).await?;
    manager.drop_table(&roles.name).await?;
    manager.gateway().close().await;

    Ok(())
}
