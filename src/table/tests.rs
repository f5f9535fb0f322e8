//! Tests for the table surface

use super::*;
use crate::types::{FullRecord, ResourcePage};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Mutex;

fn stat_def() -> TableDef {
    TableDef::new("stat", "stat", "Battle stats")
        .key_columns(["id", "name"])
        .column(Column::hydrated("id", "Identifier", ColumnType::Int))
        .column(Column::reference("name", "Resource name", ColumnType::String))
        .column(Column::hydrated(
            "is_battle_only",
            "Battle-only flag",
            ColumnType::Bool,
        ))
        .column(Column::hydrated(
            "affecting_moves",
            "Moves affecting this stat",
            ColumnType::Json,
        ))
}

/// Source with one listing page and one record, counting record fetches
struct StatSource {
    record_calls: Mutex<u32>,
}

impl StatSource {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            record_calls: Mutex::new(0),
        })
    }

    fn record_fetches(&self) -> u32 {
        *self.record_calls.lock().unwrap()
    }
}

#[async_trait]
impl CatalogSource for StatSource {
    async fn fetch_page(&self, _kind: &str, _offset: u32) -> Result<ResourcePage> {
        Ok(ResourcePage::last(vec![
            ResourceReference::new("hp", "https://api.example.com/v2/stat/1/"),
            ResourceReference::new("attack", "https://api.example.com/v2/stat/2/"),
        ]))
    }

    async fn fetch_record(&self, _kind: &str, identifier: &str) -> Result<FullRecord> {
        *self.record_calls.lock().unwrap() += 1;
        match identifier {
            "hp" | "1" => Ok(json!({
                "id": 1,
                "name": "hp",
                "is_battle_only": false,
                "affecting_moves": {"increase": [], "decrease": []}
            })),
            "attack" | "2" => Ok(json!({
                "id": 2,
                "name": "attack",
                "is_battle_only": false,
                "affecting_moves": {"increase": [], "decrease": []}
            })),
            _ => Err(Error::decode("expected value at line 1 column 1")),
        }
    }
}

#[test]
fn test_registry_lookup() {
    let mut registry = Registry::new();
    registry.register(stat_def());

    assert_eq!(registry.table_names(), vec!["stat".to_string()]);
    assert!(registry.table("stat").is_some());
    assert!(registry.table("berry").is_none());

    let err = registry
        .bind("berry", StatSource::new(), SuppressionPolicy::default())
        .unwrap_err();
    assert!(matches!(err, Error::TableNotFound { .. }));
}

#[test]
fn test_needs_hydration() {
    let def = stat_def();
    assert!(def.has_hydrated_columns());
    assert!(!def.needs_hydration(&["name".to_string()]));
    assert!(def.needs_hydration(&["name".to_string(), "id".to_string()]));
    // Unknown columns resolve to nothing and never force hydration.
    assert!(!def.needs_hydration(&["bogus".to_string()]));
}

#[tokio::test]
async fn test_scan_bare_projection_never_hydrates() {
    let source = StatSource::new();
    let table = BoundTable::new(stat_def(), source.clone(), SuppressionPolicy::default());

    let rows: Vec<Row> = table
        .scan(Some(vec!["name".to_string()]))
        .map(|r| r.unwrap())
        .collect()
        .await;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("name"), Some(&json!("hp")));
    assert_eq!(rows[0].get("id"), None);
    assert_eq!(source.record_fetches(), 0);
}

#[tokio::test]
async fn test_scan_hydrated_projection_hydrates_once_per_row() {
    let source = StatSource::new();
    let table = BoundTable::new(stat_def(), source.clone(), SuppressionPolicy::default());

    let rows: Vec<Row> = table
        .scan(Some(vec!["name".to_string(), "id".to_string()]))
        .map(|r| r.unwrap())
        .collect()
        .await;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("id"), Some(&json!(1)));
    assert_eq!(rows[1].get("id"), Some(&json!(2)));
    assert_eq!(source.record_fetches(), 2);
}

#[tokio::test]
async fn test_get_builds_full_row() {
    let table = BoundTable::new(stat_def(), StatSource::new(), SuppressionPolicy::default());

    let row = table.get("hp").await.unwrap().unwrap();
    assert_eq!(row.get("id"), Some(&json!(1)));
    assert_eq!(row.get("name"), Some(&json!("hp")));
    assert_eq!(row.get("is_battle_only"), Some(&json!(false)));
    assert!(row.get("affecting_moves").unwrap().is_object());

    // Id and name key forms resolve to the same row.
    let by_id = table.get("1").await.unwrap().unwrap();
    assert_eq!(row.get("id"), by_id.get("id"));
    assert_eq!(row.get("name"), by_id.get("name"));
}

#[tokio::test]
async fn test_get_suppressed_miss_is_absent_row() {
    let table = BoundTable::new(stat_def(), StatSource::new(), SuppressionPolicy::default());
    assert!(table.get("no-such-stat").await.unwrap().is_none());
}

#[tokio::test]
async fn test_should_ignore_delegates_to_policy() {
    let table = BoundTable::new(stat_def(), StatSource::new(), SuppressionPolicy::default());
    assert!(table.should_ignore(&Error::decode("expected value at line 1 column 1")));
    assert!(!table.should_ignore(&Error::http_status(500, "boom")));
}

#[test]
fn test_coerce_type_mismatch_is_null() {
    let id = Column::hydrated("id", "Identifier", ColumnType::Int);
    assert_eq!(coerce(&id, Some(json!("not-a-number"))), JsonValue::Null);
    assert_eq!(coerce(&id, Some(json!(7))), json!(7));
    assert_eq!(coerce(&id, None), JsonValue::Null);

    let blob = Column::hydrated("names", "Localized names", ColumnType::Json);
    assert_eq!(coerce(&blob, Some(json!(["a", "b"]))), json!(["a", "b"]));
}
