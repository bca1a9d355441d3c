//! Plugin command and message flows against the in-memory host

use serde_json::json;
use varbind_app::controller::{
    MSG_CREATE_COLLECTION, MSG_CREATE_OR_ADD_COLLECTION, MSG_LINKED, MSG_NOTHING_LINKED,
    MSG_SELECT_NODE,
};
use varbind_app::saved::{save_token, saved_collection, saved_token, COLLECTION_KEY};
use varbind_app::{
    collection_options, Command, CollectionCatalog, CommandOutcome, Plugin, PluginConfig,
    UiMessage, UserInputError,
};
use varbind_core::{BindableProperty, CollectionRef, DocumentHost, VariableId};
use varbind_memory::MemoryHost;

const SPACING: &str = "VariableCollectionId:1:0";
const LOCAL_TOKEN: &str = r#"{"type":"local","id":"VariableCollectionId:1:0"}"#;
const LIBRARY_TOKEN: &str = r#"{"type":"library","id":"lib-radius"}"#;

fn document(selection: &[&str], with_collections: bool) -> MemoryHost {
    let mut document = json!({
        "selection": selection,
        "nodes": [
            { "id": "2:1", "name": "Card", "type": "FRAME",
              "layout": { "layoutMode": "VERTICAL", "paddingLeft": 8, "paddingRight": 9 } }
        ]
    });
    if with_collections {
        document["collections"] = json!([{
            "id": SPACING,
            "name": "Spacing",
            "defaultModeId": "1:0",
            "variableIds": ["VariableID:1:1"]
        }]);
        document["variables"] = json!([{
            "id": "VariableID:1:1", "name": "space/2",
            "variableCollectionId": SPACING, "resolvedType": "FLOAT",
            "scopes": ["GAP"], "valuesByMode": { "1:0": 8 }
        }]);
        document["libraries"] = json!([{
            "key": "lib-radius",
            "name": "Radius",
            "libraryName": "Core",
            "variables": [
                { "key": "k-r4", "name": "radius/sm", "resolvedType": "FLOAT",
                  "scopes": ["CORNER_RADIUS"], "valuesByMode": { "7:0": 4 } }
            ]
        }]);
    }
    MemoryHost::from_json(&document.to_string()).unwrap()
}

fn padding_left(host: &MemoryHost) -> Option<VariableId> {
    host.node_snapshot("2:1")
        .and_then(|node| node.bound_variable(BindableProperty::PaddingLeft).cloned())
}

#[tokio::test]
async fn test_catalog_lists_locals_then_libraries() {
    let host = document(&["2:1"], true);

    let options = collection_options(&host).await.unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].text, "Spacing");
    assert_eq!(options[0].value, LOCAL_TOKEN);
    assert_eq!(options[1].text, "Radius (Core)");
    assert_eq!(options[1].value, LIBRARY_TOKEN);
}

#[tokio::test]
async fn test_saved_token_round_trip() {
    let host = document(&["2:1"], true);
    let catalog = CollectionCatalog::load(&host).await.unwrap();

    save_token(&host, LIBRARY_TOKEN);

    assert_eq!(saved_token(&host, &catalog), LIBRARY_TOKEN);
    assert_eq!(
        saved_collection(&host, &catalog),
        Some(CollectionRef::library("lib-radius", "Core"))
    );
}

#[tokio::test]
async fn test_legacy_raw_id_reads_as_local() {
    let host = document(&["2:1"], true);
    let catalog = CollectionCatalog::load(&host).await.unwrap();

    host.set_plugin_data(COLLECTION_KEY, SPACING);

    assert_eq!(saved_token(&host, &catalog), LOCAL_TOKEN);
}

#[tokio::test]
async fn test_stale_or_malformed_token_reads_as_unset() {
    let host = document(&["2:1"], true);
    let catalog = CollectionCatalog::load(&host).await.unwrap();

    save_token(&host, r#"{"type":"local","id":"VariableCollectionId:9:9"}"#);
    assert_eq!(saved_token(&host, &catalog), "");

    save_token(&host, r#"{"type":"#);
    assert_eq!(saved_token(&host, &catalog), "");
    assert_eq!(saved_collection(&host, &catalog), None);
}

#[tokio::test]
async fn test_link_without_selection_aborts() {
    let host = document(&[], true);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    let outcome = plugin.run(Command::Link).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Aborted(UserInputError::NoSelection));
    let notice = host.last_notice().unwrap();
    assert_eq!(notice.message, MSG_SELECT_NODE);
    assert!(notice.options.error);
    assert_eq!(notice.options.timeout_ms, 2000);
    assert!(host.is_closed());
}

#[tokio::test]
async fn test_link_without_collections_aborts() {
    let host = document(&["2:1"], false);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    let outcome = plugin.run(Command::Link).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Aborted(UserInputError::NoCollections));
    assert_eq!(host.last_notice().unwrap().message, MSG_CREATE_COLLECTION);
    assert!(host.is_closed());
}

#[tokio::test]
async fn test_settings_without_collections_aborts() {
    let host = document(&["2:1"], false);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    plugin.run(Command::Settings).await.unwrap();

    assert_eq!(
        host.last_notice().unwrap().message,
        MSG_CREATE_OR_ADD_COLLECTION
    );
}

#[tokio::test]
async fn test_link_with_saved_collection_binds_and_closes() {
    let host = document(&["2:1"], true);
    save_token(&host, LOCAL_TOKEN);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    let outcome = plugin.run(Command::Link).await.unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.bindings.len(), 1);
    assert_eq!(padding_left(&host), Some(VariableId::new("VariableID:1:1")));
    let notice = host.last_notice().unwrap();
    assert_eq!(notice.message, MSG_LINKED);
    assert!(!notice.options.error);
    assert!(host.is_closed());
    assert!(host.panel().is_none());
}

#[tokio::test]
async fn test_link_without_saved_collection_opens_hidden_picker() {
    let host = document(&["2:1"], true);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    let outcome = plugin.run(Command::Link).await.unwrap();

    assert_eq!(outcome, CommandOutcome::PickerShown);
    let panel = host.panel().unwrap();
    assert!(!panel.is_visible());
    assert_eq!((panel.options.width, panel.options.height), (240, 140));
    assert_eq!(panel.init.collections.len(), 2);
    assert_eq!(panel.init.selected_collection, "");
    assert!(host.notices().is_empty());
    assert!(!host.is_closed());

    plugin.handle(UiMessage::ShowUi).await.unwrap();
    assert!(host.panel().unwrap().is_visible());
}

#[tokio::test]
async fn test_settings_preselects_saved_collection() {
    let host = document(&["2:1"], true);
    save_token(&host, LIBRARY_TOKEN);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    plugin.run(Command::Settings).await.unwrap();

    let panel = host.panel().unwrap();
    assert!(panel.is_visible());
    assert_eq!(panel.init.selected_collection, LIBRARY_TOKEN);
}

#[tokio::test]
async fn test_panel_flow_saves_then_links() {
    let host = document(&["2:1"], true);
    let mut plugin = Plugin::new(&host, PluginConfig::default());
    plugin.run(Command::Settings).await.unwrap();

    let message = UiMessage::from_json(&json!({
        "type": "SET_COLLECTION",
        "collection": LOCAL_TOKEN
    })
    .to_string())
    .unwrap();
    plugin.handle(message).await.unwrap();
    assert_eq!(host.plugin_data(COLLECTION_KEY), LOCAL_TOKEN);

    let outcome = plugin.handle(UiMessage::LinkSpacing).await.unwrap();

    assert!(outcome.report().unwrap().any_bound());
    assert_eq!(padding_left(&host), Some(VariableId::new("VariableID:1:1")));
    assert_eq!(host.last_notice().unwrap().message, MSG_LINKED);
    assert!(!host.is_closed());
}

#[tokio::test]
async fn test_link_spacing_without_collection_reports_nothing_linked() {
    let host = document(&["2:1"], true);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    let outcome = plugin.handle(UiMessage::LinkSpacing).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Handled);
    let notice = host.last_notice().unwrap();
    assert_eq!(notice.message, MSG_NOTHING_LINKED);
    assert!(notice.options.error);
    assert_eq!(padding_left(&host), None);
}

#[tokio::test]
async fn test_nothing_matching_reports_nothing_linked() {
    let host = document(&["2:1"], true);
    save_token(&host, LIBRARY_TOKEN);
    let mut plugin = Plugin::new(&host, PluginConfig::default());

    let outcome = plugin.run(Command::Link).await.unwrap();

    assert!(!outcome.report().unwrap().any_bound());
    assert_eq!(host.last_notice().unwrap().message, MSG_NOTHING_LINKED);
    assert!(host.is_closed());
}

#[tokio::test]
async fn test_notify_timeout_is_configurable() {
    let host = document(&[], true);
    let config = PluginConfig {
        notify_timeout_ms: 500,
        ..PluginConfig::default()
    };
    let mut plugin = Plugin::new(&host, config);

    plugin.run(Command::Link).await.unwrap();

    assert_eq!(host.last_notice().unwrap().options.timeout_ms, 500);
}
