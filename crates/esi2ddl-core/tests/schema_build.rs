use esi2ddl_core::mapping::{ResponseKind, MAPPING_TABLE};
use esi2ddl_core::schema::db::Type;
use esi2ddl_core::{schema::Builder, Document, Result, Schema};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn build(doc: Value) -> Result<Schema> {
    Builder::new().build(&Document::new(doc))
}

fn assets() -> Value {
    json!({
        "swagger": "2.0",
        "info": {"title": "EVE Swagger Interface", "description": "An OpenAPI for EVE Online", "version": "1.3.8"},
        "paths": {
            "/characters/{character_id}/assets/": {
                "get": {
                    "operationId": "get_characters_character_id_assets",
                    "description": "Return a list of the characters assets",
                    "parameters": [
                        {"name": "character_id", "in": "path", "type": "integer", "format": "int64", "required": true}
                    ],
                    "responses": {
                        "200": {
                            "schema": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "required": ["item_id"],
                                    "properties": {
                                        "item_id": {"type": "integer", "format": "int64"},
                                        "is_singleton": {"type": "boolean"}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[test]
fn assets_table() {
    let schema = build(assets()).unwrap();

    assert_eq!(schema.db.name, "EVE Swagger Interface");
    assert_eq!(schema.db.version, "1.3.8");

    let table = schema.db.table_by_name("chr_asset").unwrap();
    assert_eq!(
        table.description.as_deref(),
        Some("Return a list of the characters assets")
    );

    let columns: Vec<_> = table
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.ty.clone(), column.nullable))
        .collect();

    assert_eq!(
        columns,
        [
            ("character_id", Type::Integer(8), false),
            ("item_id", Type::Integer(8), false),
            ("is_singleton", Type::Boolean, true),
        ]
    );

    let operation = schema
        .mapping
        .operation("get_characters_character_id_assets")
        .unwrap();
    assert_eq!(operation.table, "chr_asset");
    assert_eq!(operation.kind, Some(ResponseKind::Structure));
    assert_eq!(operation.key, ["character_id"]);
    assert_eq!(
        operation.fields.keys().collect::<Vec<_>>(),
        ["character_id", "item_id", "is_singleton"]
    );
}

#[test]
fn mapping_table_is_last() {
    let schema = build(assets()).unwrap();

    let last = schema.db.tables.last().unwrap();
    assert_eq!(last.name, MAPPING_TABLE);
    assert_eq!(
        last.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>(),
        ["version", "description", "mapping_spec"]
    );
    assert_eq!(last.column_by_name("mapping_spec").unwrap().ty, Type::Text);

    // The reserved table is not an operation target
    assert!(schema.mapping.operation_for_table(MAPPING_TABLE).is_none());
}

#[test]
fn primitive_response() {
    let schema = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/status/": {
                "get": {
                    "operationId": "get_status",
                    "responses": {"200": {"schema": {"type": "integer", "format": "int32"}}}
                }
            }
        }
    }))
    .unwrap();

    let table = schema.db.table_by_name("status").unwrap();
    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.columns[0].name, "status_id");
    assert_eq!(table.columns[0].ty, Type::Integer(4));
    assert!(table.columns[0].nullable);

    let operation = schema.mapping.operation("get_status").unwrap();
    assert_eq!(operation.kind, Some(ResponseKind::Primitive));
    assert_eq!(operation.fields["status_id"].column, "status_id");
    assert!(operation.key.is_empty());
}

#[test]
fn paths_without_get_are_skipped() {
    let schema = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/characters/{character_id}/mail/": {
                "post": {"operationId": "post_characters_character_id_mail"}
            }
        }
    }))
    .unwrap();

    assert_eq!(schema.db.tables.len(), 1);
    assert_eq!(schema.db.tables[0].name, MAPPING_TABLE);
    assert!(schema.mapping.operations.is_empty());
}

#[test]
fn tables_follow_path_order() {
    let schema = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/universe/systems/": {
                "get": {"operationId": "get_universe_systems", "responses": {"200": {"schema": {"type": "integer"}}}}
            },
            "/markets/prices/": {
                "get": {"operationId": "get_markets_prices", "responses": {"200": {"schema": {"type": "integer"}}}}
            }
        }
    }))
    .unwrap();

    let names: Vec<_> = schema.db.tables.iter().map(|table| table.name.as_str()).collect();
    assert_eq!(names, ["uv_system", "mkt_price", MAPPING_TABLE]);

    for (i, table) in schema.db.tables.iter().enumerate() {
        assert_eq!(table.id.0, i);
    }
}

#[test]
fn schema_qualifier() {
    let schema = Builder::new()
        .schema("esi")
        .build(&Document::new(assets()))
        .unwrap();

    for table in &schema.db.tables {
        assert_eq!(table.schema.as_deref(), Some("esi"));
    }

    let unqualified = build(assets()).unwrap();
    assert!(unqualified.db.tables.iter().all(|table| table.schema.is_none()));
}

#[test]
fn schema_name_falls_back_to_description() {
    let schema = build(json!({
        "info": {"description": "An OpenAPI for EVE Online", "version": "1"},
        "paths": {}
    }))
    .unwrap();

    assert_eq!(schema.db.name, "An OpenAPI for EVE Online");
    assert_eq!(
        schema.mapping.description.as_deref(),
        Some("An OpenAPI for EVE Online")
    );
}

#[test]
fn missing_version() {
    let err = build(json!({"info": {"title": "esi"}, "paths": {}})).unwrap_err();
    assert!(err.is_invalid_document());
}

#[test]
fn missing_paths() {
    let err = build(json!({"info": {"version": "1"}})).unwrap_err();
    assert!(err.is_invalid_document());
}

#[test]
fn missing_operation_id() {
    let err = build(json!({
        "info": {"version": "1"},
        "paths": {"/status/": {"get": {"responses": {"200": {"schema": {"type": "integer"}}}}}}
    }))
    .unwrap_err();

    assert!(err.is_invalid_document());
    assert!(err.to_string().contains("operationId"));
}

#[test]
fn duplicate_operation_id() {
    let err = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/status/": {"get": {"operationId": "get_status", "responses": {"200": {"schema": {"type": "integer"}}}}},
            "/alliances/": {"get": {"operationId": "get_status", "responses": {"200": {"schema": {"type": "integer"}}}}}
        }
    }))
    .unwrap_err();

    assert!(err.is_invalid_document());
}

#[test]
fn duplicate_table_name() {
    let err = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/alliances/": {"get": {"operationId": "get_alliances", "responses": {"200": {"schema": {"type": "integer"}}}}},
            "/alliances": {"get": {"operationId": "get_alliances_legacy", "responses": {"200": {"schema": {"type": "integer"}}}}}
        }
    }))
    .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("alliance"));
}

#[test]
fn table_name_too_long() {
    let mut paths = serde_json::Map::new();
    paths.insert(
        format!("/{}/bbbb/", "a".repeat(26)),
        json!({"get": {"operationId": "get_long", "responses": {"200": {"schema": {"type": "integer"}}}}}),
    );

    let err = build(json!({"info": {"version": "1"}, "paths": paths})).unwrap_err();
    assert!(err.is_table_name_too_long());
}

#[test]
fn unknown_format() {
    let err = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/status/": {
                "get": {
                    "operationId": "get_status",
                    "responses": {"200": {"schema": {
                        "type": "object",
                        "properties": {"server_version": {"type": "string", "format": "unknown"}}
                    }}}
                }
            }
        }
    }))
    .unwrap_err();

    assert!(err.is_unknown_type());
    assert!(err.to_string().contains("unknown format: unknown, type: string"));
}

#[test]
fn unknown_model_type() {
    let err = build(json!({
        "info": {"version": "1"},
        "paths": {
            "/status/": {
                "get": {"operationId": "get_status", "responses": {"200": {"schema": {"type": "string"}}}}
            }
        }
    }))
    .unwrap_err();

    assert!(err.is_unknown_model_type());
}

#[test]
fn missing_success_schema() {
    let err = build(json!({
        "info": {"version": "1"},
        "paths": {"/status/": {"get": {"operationId": "get_status", "responses": {}}}}
    }))
    .unwrap_err();

    assert!(err.is_unknown_model_type());
}
