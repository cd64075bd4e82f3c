use serde_json::{Map, Value as JsonValue};

use crate::errors::Error;
use crate::types::logical::{LogicalType, TypeDescriptor, resolve_dtype};

/// Represents a single named column in a table schema
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub dtype: LogicalType,
}

/// Represents the resolved schema of a table (ordered list of columns).
///
/// A schema is fixed once a table is built over it; there is no alter or
/// migration path.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    /// Resolves column names and type descriptors into a schema.
    /// Returns an error if the lists differ in length, a name repeats, or
    /// a descriptor has no registry mapping.
    pub fn resolve(names: &[&str], descriptors: &[TypeDescriptor]) -> Result<Self, Error> {
        if names.len() != descriptors.len() {
            return Err(Error::SchemaMismatch(format!(
                "{} names but {} dtypes",
                names.len(),
                descriptors.len()
            )));
        }

        let mut columns: Vec<Column> = Vec::with_capacity(names.len());
        for (name, descriptor) in names.iter().zip(descriptors) {
            if columns.iter().any(|c| c.name == *name) {
                return Err(Error::SchemaMismatch(format!(
                    "duplicate column name '{name}'"
                )));
            }
            let dtype = resolve_dtype(*descriptor)?;
            columns.push(Column {
                name: name.to_string(),
                dtype,
            });
        }

        Ok(Self { columns })
    }

    /// Checks if a column exists in the schema
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the declared dtype of a column, if present
    pub fn dtype(&self, name: &str) -> Option<LogicalType> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.dtype)
    }

    /// Returns the number of columns in this schema
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Exports the schema as a JSON object of column name to category
    /// name, in column order. This is the shape the visualization layer
    /// consumes.
    pub fn to_json(&self) -> String {
        let mut map = Map::new();
        for column in &self.columns {
            map.insert(
                column.name.clone(),
                JsonValue::String(column.dtype.category().to_string()),
            );
        }
        JsonValue::Object(map).to_string()
    }
}
