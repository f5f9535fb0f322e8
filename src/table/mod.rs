//! Resource table surface
//!
//! What the host query engine sees: named table definitions in a registry,
//! and a bound table offering `scan` (listing-driven, hydrating lazily only
//! when a projected column needs the full record) and `get` (point lookup by
//! id or name). The host also gets a per-error suppression verdict so it can
//! report "row not found" instead of a query failure for the known upstream
//! miss symptom.

mod types;

pub use types::{coerce, Column, ColumnType, Row, TableDef};

use crate::client::CatalogSource;
use crate::error::{Error, Result};
use crate::hydrate::Hydrator;
use crate::listing::ResourceWalk;
use crate::suppress::SuppressionPolicy;
use crate::types::{JsonValue, ResourceReference};
use futures::stream::{self, Stream};
use std::collections::BTreeMap;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed stream of output rows
pub type RowStream = Pin<Box<dyn Stream<Item = Result<Row>> + Send>>;

// ============================================================================
// Catalog
// ============================================================================

/// Named lookup of table definitions
pub trait TableCatalog: Send + Sync {
    /// Names of all registered tables
    fn table_names(&self) -> Vec<String>;

    /// Retrieve a table definition if it exists
    fn table(&self, name: &str) -> Option<&TableDef>;
}

/// In-memory table registry
#[derive(Debug, Default, Clone)]
pub struct Registry {
    tables: BTreeMap<String, TableDef>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table definition, replacing any previous one of that name
    pub fn register(&mut self, def: TableDef) {
        self.tables.insert(def.name.clone(), def);
    }

    /// Bind a registered table to a catalog source
    pub fn bind(
        &self,
        name: &str,
        source: Arc<dyn CatalogSource>,
        policy: SuppressionPolicy,
    ) -> Result<BoundTable> {
        let def = self
            .table(name)
            .ok_or_else(|| Error::table_not_found(name))?
            .clone();
        Ok(BoundTable::new(def, source, policy))
    }
}

impl TableCatalog for Registry {
    fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }
}

// ============================================================================
// Bound table
// ============================================================================

/// A table definition bound to a catalog source, ready to serve queries
pub struct BoundTable {
    def: TableDef,
    source: Arc<dyn CatalogSource>,
    policy: SuppressionPolicy,
}

impl BoundTable {
    /// Bind a definition to a source
    pub fn new(def: TableDef, source: Arc<dyn CatalogSource>, policy: SuppressionPolicy) -> Self {
        Self {
            def,
            source,
            policy,
        }
    }

    /// The table definition
    pub fn def(&self) -> &TableDef {
        &self.def
    }

    /// Suppression verdict for the host: treat this error as "row not
    /// found" rather than a query failure?
    pub fn should_ignore(&self, err: &Error) -> bool {
        self.policy.is_suppressed(err)
    }

    /// Point lookup by key column value (id or name).
    ///
    /// `Ok(None)` means no such row, including the suppressed upstream miss
    /// symptom.
    pub async fn get(&self, key: &str) -> Result<Option<Row>> {
        let hydrator = Hydrator::new(self.source.clone(), self.policy.clone());
        let record = hydrator.hydrate_key(&self.def.kind, key).await?;
        Ok(record.map(|r| build_row(&self.def, None, None, Some(&r))))
    }

    /// Scan all rows, restricted to the projected columns.
    ///
    /// `None` projects every column. Hydration happens once per row and only
    /// when the projection touches a hydrated column; a suppressed hydration
    /// failure leaves those columns null instead of dropping the row.
    pub fn scan(&self, projection: Option<Vec<String>>) -> RowStream {
        let def = self.def.clone();
        let hydrate_needed = match &projection {
            None => def.has_hydrated_columns(),
            Some(cols) => def.needs_hydration(cols),
        };
        let hydrator = Hydrator::new(self.source.clone(), self.policy.clone());
        let walk = ResourceWalk::new(self.source.clone(), self.policy.clone(), def.kind.clone());

        Box::pin(stream::unfold(
            (walk, hydrator, def, projection),
            move |(mut walk, hydrator, def, projection)| async move {
                let item = walk.next_reference().await?;
                let row = match item {
                    Err(err) => Err(err),
                    Ok(reference) => {
                        match scan_record(&hydrator, &def, &reference, hydrate_needed).await {
                            Err(err) => Err(err),
                            Ok(record) => Ok(build_row(
                                &def,
                                projection.as_deref(),
                                Some(&reference),
                                record.as_ref(),
                            )),
                        }
                    }
                };
                Some((row, (walk, hydrator, def, projection)))
            },
        ))
    }
}

impl std::fmt::Debug for BoundTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundTable")
            .field("def", &self.def.name)
            .finish_non_exhaustive()
    }
}

/// Hydrate one scanned reference when the projection requires it
async fn scan_record(
    hydrator: &Hydrator,
    def: &TableDef,
    reference: &ResourceReference,
    hydrate_needed: bool,
) -> Result<Option<JsonValue>> {
    if !hydrate_needed {
        return Ok(None);
    }
    hydrator.hydrate_reference(&def.kind, reference).await
}

// ============================================================================
// Row building
// ============================================================================

/// Materialize one row from the available parts.
///
/// Values come from the record when present, falling back to the listing
/// reference for the bare columns; anything unavailable is null.
fn build_row(
    def: &TableDef,
    projection: Option<&[String]>,
    reference: Option<&ResourceReference>,
    record: Option<&JsonValue>,
) -> Row {
    let mut row = Row::new();
    for column in &def.columns {
        if let Some(projected) = projection {
            if !projected.iter().any(|name| *name == column.name) {
                continue;
            }
        }
        let raw = raw_value(column, reference, record);
        row.insert(column.name.clone(), coerce(column, raw));
    }
    row
}

fn raw_value(
    column: &Column,
    reference: Option<&ResourceReference>,
    record: Option<&JsonValue>,
) -> Option<JsonValue> {
    if let Some(value) = record.and_then(|r| field_at(r, &column.name)) {
        return Some(value.clone());
    }
    match reference {
        Some(r) if column.name == "name" => Some(JsonValue::String(r.name.clone())),
        Some(r) if column.name == "url" => Some(JsonValue::String(r.url.clone())),
        _ => None,
    }
}

/// Dot-path field access into a JSON document
fn field_at<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let mut current = value;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests;
