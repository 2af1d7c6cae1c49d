//! Turns table descriptions into MySQL schema-definition statements.
//!
//! Everything here is pure: no I/O, no shared state. Identifiers are
//! interpolated as given, so callers must pass names that are already safe.

use crate::libs::error::Result;
use crate::libs::schema::{ColumnSpec, ForeignKey, KeyRole, TableSpec, validate_table};

/// Single-identifier statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    CreateDatabase,
    DropDatabase,
    DropTable,
    Use,
}

impl StatementKind {
    pub fn prefix(self) -> &'static str {
        match self {
            StatementKind::CreateDatabase => "CREATE DATABASE IF NOT EXISTS ",
            StatementKind::DropDatabase => "DROP DATABASE IF EXISTS ",
            StatementKind::DropTable => "DROP TABLE ",
            StatementKind::Use => "USE ",
        }
    }
}

/// Build a single-identifier statement.
///
/// # Example
/// ```
/// use tablesmith::{compile_statement, StatementKind};
/// assert_eq!(compile_statement(StatementKind::Use, "test_db_1"), "USE test_db_1");
/// ```
pub fn compile_statement(kind: StatementKind, name: &str) -> String {
    format!("{}{}", kind.prefix(), name)
}

/// Render one column clause.
///
/// The column is assumed valid; [`compile_table`] validates before calling this.
pub fn compile_column(column: &ColumnSpec) -> String {
    if let Some(fk) = &column.foreign_key {
        return foreign_key_fragment(column, fk);
    }

    let mut fragment = format!("{} {}", column.name, column.value_type.literal());
    if matches!(column.key_role, KeyRole::Primary | KeyRole::Unique) {
        fragment.push(' ');
        fragment.push_str(column.key_role.literal());
    }
    if column.auto_increment {
        fragment.push_str(" AUTO_INCREMENT");
    }
    if column.unique {
        fragment.push_str(" UNIQUE");
    }
    if let Some(default) = column.default_value.as_deref().filter(|d| !d.is_empty()) {
        fragment.push_str(" DEFAULT ");
        fragment.push_str(default);
    }
    fragment
}

/// The two-line form used for foreign-key columns.
///
/// Key role, `AUTO_INCREMENT`, `UNIQUE` and `DEFAULT` are not emitted for these
/// columns; existing description files depend on that output.
fn foreign_key_fragment(column: &ColumnSpec, fk: &ForeignKey) -> String {
    format!(
        "{name} {ty},\n\tFOREIGN KEY ({name}) REFERENCES {table}({col})",
        name = column.name,
        ty = column.value_type.literal(),
        table = fk.reference_table,
        col = fk.reference_column,
    )
}

/// Build the `CREATE TABLE` statement for `table_name`, columns in input order.
///
/// # Example
/// ```
/// use tablesmith::{compile_table, ColumnSpec, ValueType};
/// let sql = compile_table("tags", &[ColumnSpec::new("tag", ValueType::Text)]).unwrap();
/// assert_eq!(sql, "CREATE TABLE tags (\n\ttag TEXT\n);");
/// ```
pub fn compile_table(table_name: &str, columns: &[ColumnSpec]) -> Result<String> {
    validate_table(table_name, columns)?;
    let fragments: Vec<String> = columns.iter().map(compile_column).collect();
    Ok(format!(
        "CREATE TABLE {} (\n\t{}\n);",
        table_name,
        fragments.join(",\n\t")
    ))
}

impl TableSpec {
    pub fn to_sql(&self) -> Result<String> {
        compile_table(&self.name, &self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::SchemaError;
    use crate::libs::schema::ValueType;

    fn roles() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("role_id", ValueType::Int).primary_key().auto_increment(),
            ColumnSpec::new("role_name", ValueType::Varchar).unique(),
            ColumnSpec::new("created_at", ValueType::DateTime),
            ColumnSpec::new("updated_at", ValueType::DateTime),
        ]
    }

    #[test]
    fn compiles_roles_table() {
        let sql = compile_table("roles", &roles()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE roles (\n\
             \trole_id INT PRIMARY KEY AUTO_INCREMENT,\n\
             \trole_name VARCHAR(255) UNIQUE,\n\
             \tcreated_at DATETIME,\n\
             \tupdated_at DATETIME\n\
             );"
        );
    }

    #[test]
    fn foreign_key_fragment_shape() {
        let col = ColumnSpec::new("role_id", ValueType::Int).references("roles", "role_id");
        assert_eq!(
            compile_column(&col),
            "role_id INT,\n\tFOREIGN KEY (role_id) REFERENCES roles(role_id)"
        );
    }

    // Modifiers on foreign-key columns are dropped. Pinned until it is decided
    // whether they should be emitted.
    #[test]
    fn foreign_key_column_drops_modifiers() {
        let col = ColumnSpec::new("owner_id", ValueType::Int)
            .references("users", "user_id")
            .unique()
            .auto_increment()
            .default_value("1");
        assert_eq!(
            compile_column(&col),
            "owner_id INT,\n\tFOREIGN KEY (owner_id) REFERENCES users(user_id)"
        );
    }

    #[test]
    fn modifiers_follow_fixed_order() {
        let col = ColumnSpec::new("code", ValueType::Char)
            .unique_key()
            .default_value("'A'")
            .unique()
            .auto_increment();
        assert_eq!(
            compile_column(&col),
            "code CHAR UNIQUE KEY AUTO_INCREMENT UNIQUE DEFAULT 'A'"
        );
    }

    #[test]
    fn empty_default_is_ignored() {
        let col = ColumnSpec::new("price", ValueType::Decimal).default_value("");
        assert_eq!(compile_column(&col), "price DECIMAL");
    }

    #[test]
    fn check_is_not_rendered() {
        let col = ColumnSpec::new("age", ValueType::Int).check("age >= 0");
        assert_eq!(compile_column(&col), "age INT");
    }

    #[test]
    fn one_fragment_per_column_in_order() {
        let cols = roles();
        let sql = compile_table("roles", &cols).unwrap();
        let body = sql
            .strip_prefix("CREATE TABLE roles (\n\t")
            .and_then(|s| s.strip_suffix("\n);"))
            .unwrap();
        let names: Vec<&str> = body
            .split(",\n\t")
            .map(|f| f.split(' ').next().unwrap())
            .collect();
        assert_eq!(names, ["role_id", "role_name", "created_at", "updated_at"]);
    }

    #[test]
    fn compile_is_idempotent() {
        let table = TableSpec::new("roles", roles());
        assert_eq!(table.to_sql().unwrap(), table.to_sql().unwrap());
    }

    #[test]
    fn empty_column_name_is_rejected() {
        let cols = vec![ColumnSpec::new("", ValueType::Int)];
        assert!(matches!(
            compile_table("roles", &cols),
            Err(SchemaError::MalformedSpec(_))
        ));
    }

    #[test]
    fn empty_table_name_is_rejected() {
        assert!(matches!(
            compile_table(" ", &roles()),
            Err(SchemaError::MalformedSpec(_))
        ));
    }

    #[test]
    fn statement_kinds() {
        assert_eq!(compile_statement(StatementKind::Use, "test_db_1"), "USE test_db_1");
        assert_eq!(
            compile_statement(StatementKind::CreateDatabase, "shop"),
            "CREATE DATABASE IF NOT EXISTS shop"
        );
        assert_eq!(
            compile_statement(StatementKind::DropDatabase, "shop"),
            "DROP DATABASE IF EXISTS shop"
        );
        assert_eq!(compile_statement(StatementKind::DropTable, "users"), "DROP TABLE users");
    }
}
