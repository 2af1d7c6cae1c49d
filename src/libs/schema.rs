use crate::libs::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};

/// Column value types understood by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ValueType {
    Int,
    Varchar,
    Char,
    Text,
    Float,
    Double,
    Decimal,
    Date,
    DateTime,
}

/// Type literals, indexed by discriminant.
const VALUE_TYPE_LITERALS: [(ValueType, &str); 9] = [
    (ValueType::Int, "INT"),
    (ValueType::Varchar, "VARCHAR(255)"),
    (ValueType::Char, "CHAR"),
    (ValueType::Text, "TEXT"),
    (ValueType::Float, "FLOAT"),
    (ValueType::Double, "DOUBLE"),
    (ValueType::Decimal, "DECIMAL"),
    (ValueType::Date, "DATE"),
    (ValueType::DateTime, "DATETIME"),
];

impl ValueType {
    /// The SQL type literal emitted for this type.
    pub fn literal(self) -> &'static str {
        VALUE_TYPE_LITERALS[self as usize].1
    }

    pub fn from_literal(literal: &str) -> Option<Self> {
        VALUE_TYPE_LITERALS
            .iter()
            .find(|(_, l)| *l == literal)
            .map(|(t, _)| *t)
    }
}

impl From<ValueType> for &'static str {
    fn from(value: ValueType) -> Self {
        value.literal()
    }
}

impl TryFrom<String> for ValueType {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_literal(&value)
            .ok_or_else(|| SchemaError::MalformedSpec(format!("unknown value type '{}'", value)))
    }
}

/// Structural role of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum KeyRole {
    #[default]
    None,
    Primary,
    Unique,
    Foreign,
}

/// Key role literals, indexed by discriminant.
const KEY_ROLE_LITERALS: [(KeyRole, &str); 4] = [
    (KeyRole::None, ""),
    (KeyRole::Primary, "PRIMARY KEY"),
    (KeyRole::Unique, "UNIQUE KEY"),
    (KeyRole::Foreign, "FOREIGN KEY"),
];

impl KeyRole {
    pub fn literal(self) -> &'static str {
        KEY_ROLE_LITERALS[self as usize].1
    }

    pub fn from_literal(literal: &str) -> Option<Self> {
        KEY_ROLE_LITERALS
            .iter()
            .find(|(_, l)| *l == literal)
            .map(|(r, _)| *r)
    }
}

impl From<KeyRole> for &'static str {
    fn from(value: KeyRole) -> Self {
        value.literal()
    }
}

impl TryFrom<String> for KeyRole {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_literal(&value)
            .ok_or_else(|| SchemaError::MalformedSpec(format!("unknown key type '{}'", value)))
    }
}

/// The `(table, column)` a foreign-key column points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub reference_table: String,
    pub reference_column: String,
}

/// Description of one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "key_type", default)]
    pub key_role: KeyRole,
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
    /// Carried through storage; not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_increment: bool,
}

impl ColumnSpec {
    /// A plain column with no key role or modifiers.
    /// ```
    /// use tablesmith::{ColumnSpec, ValueType};
    /// let id = ColumnSpec::new("role_id", ValueType::Int).primary_key().auto_increment();
    /// ```
    pub fn new(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            key_role: KeyRole::None,
            value_type,
            foreign_key: None,
            unique: false,
            check: None,
            default_value: None,
            auto_increment: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.key_role = KeyRole::Primary;
        self
    }

    pub fn unique_key(mut self) -> Self {
        self.key_role = KeyRole::Unique;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn check(mut self, expression: &str) -> Self {
        self.check = Some(expression.to_string());
        self
    }

    /// Make this a foreign-key column referencing `table(column)`.
    pub fn references(mut self, table: &str, column: &str) -> Self {
        self.key_role = KeyRole::Foreign;
        self.foreign_key = Some(ForeignKey {
            reference_table: table.to_string(),
            reference_column: column.to_string(),
        });
        self
    }

    /// Check the column invariants, returning `MalformedSpec` on the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::MalformedSpec(
                "column name must not be empty".to_string(),
            ));
        }
        match (&self.key_role, &self.foreign_key) {
            (KeyRole::Foreign, None) => Err(SchemaError::MalformedSpec(format!(
                "column '{}' is a foreign key without a reference",
                self.name
            ))),
            (KeyRole::Foreign, Some(fk)) => {
                if fk.reference_table.trim().is_empty() || fk.reference_column.trim().is_empty() {
                    return Err(SchemaError::MalformedSpec(format!(
                        "column '{}' has an incomplete foreign-key reference",
                        self.name
                    )));
                }
                Ok(())
            }
            (role, Some(_)) => Err(SchemaError::MalformedSpec(format!(
                "column '{}' has a foreign-key reference but key type '{}'",
                self.name,
                role.literal()
            ))),
            (_, None) => Ok(()),
        }
    }
}

/// A table name plus its columns in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: &str, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: name.to_string(),
            columns,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_table(&self.name, &self.columns)
    }
}

pub(crate) fn validate_table(name: &str, columns: &[ColumnSpec]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SchemaError::MalformedSpec(
            "table name must not be empty".to_string(),
        ));
    }
    columns.iter().try_for_each(ColumnSpec::validate)
}
