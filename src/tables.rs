//! Built-in table definitions
//!
//! Declarative column metadata for the resource kinds shipped with the
//! crate. Each definition keys `get` by id or name and marks everything
//! beyond the bare listing fields as hydrated, so detail columns are only
//! fetched when a query asks for them.

use crate::table::{Column, ColumnType, Registry, TableDef};

/// Registry with all built-in tables registered
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(stat_table());
    registry.register(berry_table());
    registry.register(type_table());
    registry
}

/// Stats determine certain aspects of battles, growing with level
fn stat_table() -> TableDef {
    TableDef::new("stat", "stat", "Stats determine certain aspects of battles. Each Pokémon has a value for each stat which grows as they gain levels and can be altered momentarily by effects in battles.")
        .key_columns(["id", "name"])
        .column(Column::hydrated("id", "The identifier for this resource.", ColumnType::Int))
        .column(Column::reference("name", "The name for this resource.", ColumnType::String))
        .column(Column::hydrated("game_index", "ID the games use for this stat.", ColumnType::Int))
        .column(Column::hydrated("is_battle_only", "Whether this stat only exists within a battle.", ColumnType::Bool))
        .column(Column::hydrated("affecting_moves", "A detail of moves which affect this stat positively or negatively.", ColumnType::Json))
        .column(Column::hydrated("affecting_natures", "A detail of natures which affect this stat positively or negatively.", ColumnType::Json))
        .column(Column::hydrated("characteristics", "A list of characteristics that are set on a Pokémon when its highest base stat is this stat.", ColumnType::Json))
        .column(Column::hydrated("move_damage_class", "The class of damage this stat is directly related to.", ColumnType::Json))
        .column(Column::hydrated("names", "The name of this resource listed in different languages.", ColumnType::Json))
}

/// Berries are small fruits that can provide HP and status condition
/// restoration, stat enhancement, and even damage negation when eaten
fn berry_table() -> TableDef {
    TableDef::new("berry", "berry", "Berries are small fruits that can provide HP and status condition restoration, stat enhancement, and even damage negation when eaten by Pokémon.")
        .key_columns(["id", "name"])
        .column(Column::hydrated("id", "The identifier for this resource.", ColumnType::Int))
        .column(Column::reference("name", "The name for this resource.", ColumnType::String))
        .column(Column::hydrated("growth_time", "Time it takes the tree to grow one stage, in hours.", ColumnType::Int))
        .column(Column::hydrated("max_harvest", "The maximum number of these berries that can grow on one tree.", ColumnType::Int))
        .column(Column::hydrated("natural_gift_power", "The power of the move Natural Gift when used with this berry.", ColumnType::Int))
        .column(Column::hydrated("size", "The size of this berry, in millimeters.", ColumnType::Int))
        .column(Column::hydrated("smoothness", "The smoothness of this berry, used in making Pokéblocks or Poffins.", ColumnType::Int))
        .column(Column::hydrated("soil_dryness", "The speed at which this berry dries out the soil as it grows.", ColumnType::Int))
        .column(Column::hydrated("firmness", "The firmness of this berry, used in making Pokéblocks or Poffins.", ColumnType::Json))
        .column(Column::hydrated("flavors", "A list of references to each flavor a berry can have and the potency of each of those flavors.", ColumnType::Json))
        .column(Column::hydrated("item", "Berries are actually items. This is a reference to the item specific data for this berry.", ColumnType::Json))
        .column(Column::hydrated("natural_gift_type", "The type inherited by Natural Gift when used with this berry.", ColumnType::Json))
}

/// Types are properties of Pokémon and their moves, driving battle
/// effectiveness
fn type_table() -> TableDef {
    TableDef::new("type", "type", "Types are properties for Pokémon and their moves. Each type has three properties: which types of Pokémon it is super effective against, which types of Pokémon it is not very effective against, and which types of Pokémon it is completely ineffective against.")
        .key_columns(["id", "name"])
        .column(Column::hydrated("id", "The identifier for this resource.", ColumnType::Int))
        .column(Column::reference("name", "The name for this resource.", ColumnType::String))
        .column(Column::hydrated("damage_relations", "A detail of how effective this type is toward others and vice versa.", ColumnType::Json))
        .column(Column::hydrated("game_indices", "A list of game indices relevant to this item by generation.", ColumnType::Json))
        .column(Column::hydrated("generation", "The generation this type was introduced in.", ColumnType::Json))
        .column(Column::hydrated("move_damage_class", "The class of damage inflicted by this type.", ColumnType::Json))
        .column(Column::hydrated("names", "The name of this resource listed in different languages.", ColumnType::Json))
        .column(Column::hydrated("pokemon", "A list of details of Pokémon that have this type.", ColumnType::Json))
        .column(Column::hydrated("moves", "A list of moves that have this type.", ColumnType::Json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableCatalog;

    #[test]
    fn test_builtin_registry_contents() {
        let registry = builtin_registry();
        assert_eq!(
            registry.table_names(),
            vec!["berry".to_string(), "stat".to_string(), "type".to_string()]
        );
    }

    #[test]
    fn test_every_builtin_keys_on_id_and_name() {
        let registry = builtin_registry();
        for name in registry.table_names() {
            let def = registry.table(&name).unwrap();
            assert_eq!(def.key_columns, vec!["id", "name"], "table {name}");
            assert!(def.has_hydrated_columns(), "table {name}");
            // The bare reference column is never marked hydrated.
            assert!(!def.column_by_name("name").unwrap().hydrated, "table {name}");
        }
    }

    #[test]
    fn test_stat_table_columns() {
        let registry = builtin_registry();
        let stat = registry.table("stat").unwrap();
        assert_eq!(
            stat.column_names(),
            vec![
                "id",
                "name",
                "game_index",
                "is_battle_only",
                "affecting_moves",
                "affecting_natures",
                "characteristics",
                "move_damage_class",
                "names"
            ]
        );
    }
}
