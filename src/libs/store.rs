//! Persistence of column descriptions, one JSON file per table.

use crate::libs::error::{Result, SchemaError};
use crate::libs::schema::{ColumnSpec, validate_table};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Loads and saves column descriptions keyed by table name.
pub trait DescriptionStore {
    fn load(&self, table_name: &str) -> Result<Vec<ColumnSpec>>;
    fn save(&self, table_name: &str, columns: &[ColumnSpec]) -> Result<()>;
}

/// Stores `<dir>/<table>.json` files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, table_name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", table_name))
    }
}

impl DescriptionStore for JsonFileStore {
    fn load(&self, table_name: &str) -> Result<Vec<ColumnSpec>> {
        let path = self.path_for(table_name);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SchemaError::NotFound(table_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let columns: Vec<ColumnSpec> = serde_json::from_slice(&data).map_err(|e| {
            SchemaError::MalformedSpec(format!("{}: {}", path.display(), e))
        })?;
        validate_table(table_name, &columns)?;

        log::debug!(
            "Loaded {} column(s) for table {} from {}",
            columns.len(),
            table_name,
            path.display()
        );
        Ok(columns)
    }

    fn save(&self, table_name: &str, columns: &[ColumnSpec]) -> Result<()> {
        validate_table(table_name, columns)?;

        let json = to_pretty_json(columns)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(table_name);
        fs::write(&path, json)?;

        log::info!("Saved description for table {} to {}", table_name, path.display());
        Ok(())
    }
}

/// Pretty JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e).into())
}
