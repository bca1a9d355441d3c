//! Document load, mutate, and save through the host interfaces

use varbind_core::{
    BindableProperty, DocumentHost, HostError, NodeId, VariableHost, VariableId,
};
use varbind_memory::{DocumentError, DocumentFile, MemoryHost};

const DOCUMENT: &str = r#"{
    "selection": ["1:2"],
    "pluginData": { "collection": "VariableCollectionId:1:0" },
    "collections": [{
        "id": "VariableCollectionId:1:0",
        "name": "Spacing",
        "defaultModeId": "1:0",
        "variableIds": ["VariableID:1:1"]
    }],
    "variables": [{
        "id": "VariableID:1:1",
        "name": "space/2",
        "variableCollectionId": "VariableCollectionId:1:0",
        "resolvedType": "FLOAT",
        "scopes": ["GAP"],
        "valuesByMode": { "1:0": 8 }
    }],
    "libraries": [{
        "key": "lib-radius",
        "name": "Radius",
        "libraryName": "Core",
        "variables": [
            { "key": "k-r4", "name": "radius/sm", "resolvedType": "FLOAT",
              "scopes": ["CORNER_RADIUS"], "valuesByMode": { "7:0": 4 } }
        ]
    }],
    "nodes": [{
        "id": "1:2",
        "name": "Card",
        "type": "FRAME",
        "layout": { "layoutMode": "VERTICAL", "paddingLeft": 8 },
        "children": [
            { "id": "1:3", "name": "Title", "type": "TEXT" },
            { "id": "1:4", "name": "Icon", "type": "INSTANCE", "cornerRadius": 4 }
        ]
    }]
}"#;

#[test]
fn test_tree_keeps_child_order() {
    let host = MemoryHost::from_json(DOCUMENT).unwrap();

    let card = host.node(&NodeId::new("1:2")).unwrap();
    let children: Vec<&str> = card.children.iter().map(|id| id.as_str()).collect();
    assert_eq!(children, ["1:3", "1:4"]);
    assert_eq!(host.plugin_data("collection"), "VariableCollectionId:1:0");
}

#[tokio::test]
async fn test_bindings_survive_save_and_reload() {
    let host = MemoryHost::from_json(DOCUMENT).unwrap();
    let variable = host
        .variable_by_id(&VariableId::new("VariableID:1:1"))
        .await
        .unwrap()
        .unwrap();

    host.set_bound_variable(&NodeId::new("1:2"), BindableProperty::PaddingLeft, &variable)
        .unwrap();

    let json = host.to_document().to_json().unwrap();
    let reloaded = MemoryHost::from_document(DocumentFile::from_json(&json).unwrap()).unwrap();
    let card = reloaded.node_snapshot("1:2").unwrap();
    assert_eq!(
        card.bound_variable(BindableProperty::PaddingLeft),
        Some(&variable.id)
    );
    assert_eq!(card.children.len(), 2);
}

#[tokio::test]
async fn test_binding_an_absent_property_fails() {
    let host = MemoryHost::from_json(DOCUMENT).unwrap();
    let variable = host
        .variable_by_id(&VariableId::new("VariableID:1:1"))
        .await
        .unwrap()
        .unwrap();

    let result = host.set_bound_variable(&NodeId::new("1:3"), BindableProperty::Width, &variable);

    assert!(matches!(result, Err(HostError::Unbindable { .. })));
}

#[tokio::test]
async fn test_imported_variable_resolves_by_id() {
    let host = MemoryHost::from_json(DOCUMENT).unwrap();

    let imported = host.import_variable_by_key("k-r4").await.unwrap();

    assert!(imported.remote);
    assert!(imported.variable_collection_id.contains("lib-radius"));
    let resolved = host.variable_by_id(&imported.id).await.unwrap();
    assert_eq!(resolved, Some(imported));
}

#[tokio::test]
async fn test_failing_import_is_reported() {
    let host = MemoryHost::from_json(DOCUMENT).unwrap();
    host.set_import_failing("k-r4", true);

    let result = host.import_variable_by_key("k-r4").await;

    assert!(matches!(result, Err(HostError::Import { .. })));
    assert_eq!(host.import_attempts("k-r4"), 1);
}

#[tokio::test]
async fn test_save_and_load_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("document.json");
    let host = MemoryHost::from_json(DOCUMENT).unwrap();
    let variable = host
        .variable_by_id(&VariableId::new("VariableID:1:1"))
        .await
        .unwrap()
        .unwrap();
    host.set_bound_variable(&NodeId::new("1:2"), BindableProperty::PaddingLeft, &variable)
        .unwrap();
    host.set_plugin_data("collection", "VariableCollectionId:1:0");

    host.save(&path).unwrap();
    let loaded = MemoryHost::load(&path).unwrap();

    let card = loaded.node_snapshot("1:2").unwrap();
    assert_eq!(
        card.bound_variable(BindableProperty::PaddingLeft),
        Some(&variable.id)
    );
    assert_eq!(loaded.selection(), vec![NodeId::new("1:2")]);
    assert_eq!(loaded.plugin_data("collection"), "VariableCollectionId:1:0");
}

#[test]
fn test_load_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = MemoryHost::load(&dir.path().join("missing.json"));

    assert!(matches!(result, Err(DocumentError::Read { .. })));
}

#[test]
fn test_node_listed_as_its_own_child_is_rejected() {
    let document = r#"{
        "nodes": [{
            "id": "2:1", "name": "Card", "type": "FRAME",
            "children": [{ "id": "2:1", "name": "Card again", "type": "FRAME" }]
        }]
    }"#;

    let result = MemoryHost::from_json(document);

    assert!(matches!(
        result,
        Err(DocumentError::DuplicateNode(id)) if id == NodeId::new("2:1")
    ));
}

#[test]
fn test_duplicate_ids_across_roots_are_rejected() {
    let document = r#"{
        "nodes": [
            { "id": "2:1", "name": "Card", "type": "FRAME",
              "children": [{ "id": "2:2", "name": "Body", "type": "FRAME" }] },
            { "id": "2:2", "name": "Body copy", "type": "FRAME" }
        ]
    }"#;

    assert!(matches!(
        MemoryHost::from_json(document),
        Err(DocumentError::DuplicateNode(_))
    ));
}
