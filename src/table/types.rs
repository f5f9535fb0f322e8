//! Table definition types

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// One materialized output row
pub type Row = JsonObject;

/// Column value type exposed to the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    String,
    Bool,
    Json,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int => write!(f, "int"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Bool => write!(f, "bool"),
            ColumnType::Json => write!(f, "json"),
        }
    }
}

/// One column of a resource table.
///
/// Reference columns are filled from the listing data alone; hydrated
/// columns require the full record and are fetched lazily, only when a
/// query actually projects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name, also the record field it reads
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Value type
    pub column_type: ColumnType,
    /// Whether filling this column requires record hydration
    pub hydrated: bool,
}

impl Column {
    /// A column filled from the bare listing reference
    pub fn reference(
        name: impl Into<String>,
        description: impl Into<String>,
        column_type: ColumnType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            column_type,
            hydrated: false,
        }
    }

    /// A column filled from the hydrated record
    pub fn hydrated(
        name: impl Into<String>,
        description: impl Into<String>,
        column_type: ColumnType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            column_type,
            hydrated: true,
        }
    }
}

/// Definition of one resource table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name as registered with the host
    pub name: String,
    /// Upstream resource kind backing the table
    pub kind: String,
    /// Human-readable description
    pub description: String,
    /// Columns usable as `get` keys; any one of them resolves a row
    pub key_columns: Vec<String>,
    /// Column definitions
    pub columns: Vec<Column>,
}

impl TableDef {
    /// Create a definition for a resource kind
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            key_columns: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Set the key columns
    #[must_use]
    pub fn key_columns(mut self, keys: impl IntoIterator<Item = &'static str>) -> Self {
        self.key_columns = keys.into_iter().map(ToString::to_string).collect();
        self
    }

    /// Add a column
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Look up a column by name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All column names, in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether any column at all requires hydration
    pub fn has_hydrated_columns(&self) -> bool {
        self.columns.iter().any(|c| c.hydrated)
    }

    /// Whether the given projection touches a hydrated column.
    ///
    /// Unknown names are ignored; they resolve to nothing later anyway.
    pub fn needs_hydration(&self, projection: &[String]) -> bool {
        projection
            .iter()
            .filter_map(|name| self.column_by_name(name))
            .any(|c| c.hydrated)
    }
}

/// Coerce a raw JSON value to a column's declared type.
///
/// Mismatches and missing values become null rather than errors; the host
/// engine treats null as "no value" per column.
pub fn coerce(column: &Column, value: Option<JsonValue>) -> JsonValue {
    let Some(value) = value else {
        return JsonValue::Null;
    };
    let fits = match (column.column_type, &value) {
        (ColumnType::Int, JsonValue::Number(n)) => n.is_i64() || n.is_u64(),
        (ColumnType::String, JsonValue::String(_)) | (ColumnType::Bool, JsonValue::Bool(_)) => true,
        (ColumnType::Json, _) => true,
        _ => false,
    };
    if fits {
        value
    } else {
        JsonValue::Null
    }
}
