use esi2ddl_core::schema::db::{Type, VARCHAR_SIZE};
use esi2ddl_core::schema::name::MAX_COLUMN_NAME_LEN;
use esi2ddl_core::{schema::Builder, Document, Schema};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn build(response: Value) -> Schema {
    let doc = json!({
        "info": {"version": "1"},
        "paths": {
            "/universe/stations/{station_id}/": {
                "get": {
                    "operationId": "get_universe_stations_station_id",
                    "parameters": [
                        {"name": "station_id", "in": "path", "type": "integer", "format": "int32", "required": true}
                    ],
                    "responses": {"200": {"schema": response}}
                }
            }
        },
        "definitions": {
            "position": {
                "type": "object",
                "required": ["x"],
                "properties": {
                    "x": {"type": "number", "format": "double"},
                    "y": {"type": "number", "format": "double"}
                }
            }
        }
    });

    Builder::new().build(&Document::new(doc)).unwrap()
}

fn columns(schema: &Schema) -> Vec<(String, Type, bool)> {
    schema
        .db
        .table_by_name("uv_station_dtl")
        .unwrap()
        .columns
        .iter()
        .map(|column| (column.name.clone(), column.ty.clone(), column.nullable))
        .collect()
}

#[test]
fn nested_objects_are_inlined() {
    let schema = build(json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string"},
            "position": {
                "type": "object",
                "required": ["x"],
                "properties": {
                    "x": {"type": "number", "format": "double"},
                    "y": {"type": "number", "format": "float"}
                }
            },
            "services": {"type": "array", "items": {"type": "string"}}
        }
    }));

    assert_eq!(
        columns(&schema),
        [
            ("station_id".to_string(), Type::Integer(4), false),
            ("name".to_string(), Type::VarChar(VARCHAR_SIZE), false),
            ("position_x".to_string(), Type::Float(8), false),
            ("position_y".to_string(), Type::Float(4), true),
            ("services".to_string(), Type::VarChar(VARCHAR_SIZE), true),
        ]
    );

    let operation = schema
        .mapping
        .operation("get_universe_stations_station_id")
        .unwrap();

    assert_eq!(operation.fields["position.x"].column, "position_x");
    assert!(!operation.fields["position.x"].string);
    assert!(operation.fields["name"].string);
}

#[test]
fn references_are_resolved() {
    let schema = build(json!({
        "type": "object",
        "properties": {
            "position": {"$ref": "#/definitions/position"}
        }
    }));

    let names: Vec<_> = columns(&schema).into_iter().map(|(name, ..)| name).collect();
    assert_eq!(names, ["station_id", "position_x", "position_y"]);
}

#[test]
fn property_order_does_not_change_the_columns() {
    let a = build(json!({
        "type": "object",
        "properties": {
            "owner": {"type": "integer"},
            "position": {"$ref": "#/definitions/position"},
            "name": {"type": "string"}
        }
    }));
    let b = build(json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "position": {"$ref": "#/definitions/position"},
            "owner": {"type": "integer"}
        }
    }));

    let a: BTreeSet<_> = columns(&a).into_iter().map(|(name, ..)| name).collect();
    let b: BTreeSet<_> = columns(&b).into_iter().map(|(name, ..)| name).collect();
    assert_eq!(a, b);
}

#[test]
fn duplicate_columns_keep_the_first() {
    let schema = build(json!({
        "type": "object",
        "properties": {
            "position_x": {"type": "string"},
            "position": {"$ref": "#/definitions/position"}
        }
    }));

    let table = schema.db.table_by_name("uv_station_dtl").unwrap();
    assert_eq!(
        table.column_by_name("position_x").unwrap().ty,
        Type::VarChar(VARCHAR_SIZE)
    );

    let operation = schema
        .mapping
        .operation("get_universe_stations_station_id")
        .unwrap();
    assert!(operation.fields.contains_key("position_x"));
    assert!(!operation.fields.contains_key("position.x"));
}

#[test]
fn unique_items_mark_the_primary_key() {
    let schema = build(json!({
        "type": "array",
        "items": {"type": "integer", "format": "int32", "uniqueItems": true}
    }));

    let table = schema.db.table_by_name("uv_station_dtl").unwrap();
    let keys: Vec<_> = table
        .primary_key_columns()
        .map(|column| column.name.as_str())
        .collect();
    assert_eq!(keys, ["uv_station_dtl_id"]);
}

#[test]
fn long_nested_names_are_truncated() {
    let schema = build(json!({
        "type": "object",
        "properties": {
            "corporation": {
                "type": "object",
                "properties": {
                    "headquarters": {
                        "type": "object",
                        "properties": {
                            "security_status_modifier": {"type": "number", "format": "float"}
                        }
                    }
                }
            }
        }
    }));

    let operation = schema
        .mapping
        .operation("get_universe_stations_station_id")
        .unwrap();
    let column = &operation.fields["corporation.headquarters.security_status_modifier"].column;

    assert_eq!(column.chars().count(), MAX_COLUMN_NAME_LEN);
    assert!(schema
        .db
        .table_by_name("uv_station_dtl")
        .unwrap()
        .has_column(column));
}

#[test]
fn mapping_covers_every_column() {
    let schema = build(json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "position": {"$ref": "#/definitions/position"},
            "founded": {"type": "string", "format": "date"},
            "updated": {"type": "string", "format": "date-time"}
        }
    }));

    for (_, operation) in &schema.mapping.operations {
        let table = schema.db.table_by_name(&operation.table).unwrap();

        let mapped: BTreeSet<_> = operation.columns().collect();
        let columns: BTreeSet<_> = table.columns.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(mapped, columns);
        assert_eq!(mapped.len(), operation.fields.len());
    }
}

#[test]
fn self_referencing_definitions_are_rejected() {
    let doc = json!({
        "info": {"version": "1"},
        "paths": {
            "/universe/nodes/": {
                "get": {
                    "operationId": "get_universe_nodes",
                    "responses": {"200": {"schema": {"$ref": "#/definitions/node"}}}
                }
            }
        },
        "definitions": {
            "node": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "parent": {"$ref": "#/definitions/link"}
                }
            },
            "link": {
                "type": "object",
                "properties": {
                    "node": {"$ref": "#/definitions/node"}
                }
            }
        }
    });

    let err = Builder::new().build(&Document::new(doc)).unwrap_err();
    assert!(err.is_invalid_document());

    let message = err.to_string();
    assert!(message.contains("`#/definitions/node` contains itself"), "{message}");
    assert!(message.contains("properties.parent.properties.node"), "{message}");
}

#[test]
fn shared_definitions_are_not_cycles() {
    let schema = build(json!({
        "type": "object",
        "properties": {
            "origin": {"$ref": "#/definitions/position"},
            "destination": {"$ref": "#/definitions/position"}
        }
    }));

    let names: Vec<_> = columns(&schema).into_iter().map(|(name, ..)| name).collect();
    assert_eq!(
        names,
        ["station_id", "origin_x", "origin_y", "destination_x", "destination_y"]
    );
}
