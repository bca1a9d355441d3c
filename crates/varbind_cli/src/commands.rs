//! Subcommand implementations
//!
//! Each command loads a document into a [`MemoryHost`], drives a plugin
//! session against it, and saves the document back when it changed.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use varbind_app::{Command, CollectionCatalog, CommandOutcome, Plugin, PluginConfig, UiMessage};
use varbind_engine::LinkReport;
use varbind_memory::{MemoryHost, Notice};

/// Options for `varbind link`
#[derive(Debug, Default)]
pub struct LinkRequest<'a> {
    /// Collection token to save before linking
    pub collection: Option<&'a str>,
    pub report: Option<&'a Path>,
    pub dry_run: bool,
}

fn load(document: &Path) -> Result<MemoryHost> {
    MemoryHost::load(document).with_context(|| format!("Failed to load {}", document.display()))
}

fn save(host: &MemoryHost, document: &Path) -> Result<()> {
    host.save(document)
        .with_context(|| format!("Failed to save {}", document.display()))
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        if notice.options.error {
            eprintln!("{}", notice.message);
        } else {
            println!("{}", notice.message);
        }
    }
}

fn write_report(report: &LinkReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote link report to {}", path.display());
    Ok(())
}

/// Run the link command against a document file
pub async fn link(
    document: &Path,
    request: LinkRequest<'_>,
    config: PluginConfig,
) -> Result<CommandOutcome> {
    let host = load(document)?;
    let mut plugin = Plugin::new(&host, config);

    if let Some(token) = request.collection {
        plugin
            .handle(UiMessage::SetCollection {
                collection: token.to_string(),
            })
            .await?;
    }

    let outcome = plugin.run(Command::Link).await?;
    print_notices(&host.notices());

    match &outcome {
        CommandOutcome::Linked(report) => {
            for record in &report.bindings {
                println!(
                    "{} ({}): {} -> {}",
                    record.node_name, record.node_id, record.property, record.variable_name
                );
            }
            if let Some(path) = request.report {
                write_report(report, path)?;
            }
        }
        CommandOutcome::PickerShown => {
            println!("No collection selected. Pick one with `varbind set-collection`:");
            print_catalog(&host).await?;
        }
        CommandOutcome::Aborted(_) | CommandOutcome::Handled => {}
    }

    if request.dry_run {
        info!("Dry run, leaving {} untouched", document.display());
    } else {
        save(&host, document)?;
    }
    Ok(outcome)
}

/// Open the settings panel and print what it would show
pub async fn settings(document: &Path, config: PluginConfig) -> Result<()> {
    let host = load(document)?;
    let mut plugin = Plugin::new(&host, config);
    plugin.run(Command::Settings).await?;
    print_notices(&host.notices());

    if let Some(panel) = host.panel() {
        for option in &panel.init.collections {
            let marker = if option.value == panel.init.selected_collection {
                "*"
            } else {
                " "
            };
            println!("{} {}\t{}", marker, option.text, option.value);
        }
    }
    Ok(())
}

/// Save a collection token into the document
pub async fn set_collection(document: &Path, token: &str, config: PluginConfig) -> Result<()> {
    let host = load(document)?;
    let mut plugin = Plugin::new(&host, config);
    plugin
        .handle(UiMessage::SetCollection {
            collection: token.to_string(),
        })
        .await?;
    save(&host, document)
}

/// List every collection available to the document
pub async fn collections(document: &Path) -> Result<()> {
    let host = load(document)?;
    print_catalog(&host).await
}

async fn print_catalog(host: &MemoryHost) -> Result<()> {
    let catalog = CollectionCatalog::load(host).await?;
    for entry in catalog.entries() {
        println!("{}\t{}", entry.label, entry.token);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};
    use varbind_app::saved::COLLECTION_KEY;
    use varbind_core::{BindableProperty, DocumentHost};

    const DOCUMENT: &str = r#"{
        "selection": ["2:1"],
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
        "nodes": [{
            "id": "2:1",
            "name": "Card",
            "type": "FRAME",
            "layout": { "layoutMode": "VERTICAL", "paddingLeft": 8 }
        }]
    }"#;

    const TOKEN: &str = r#"{"type":"local","id":"VariableCollectionId:1:0"}"#;

    fn document_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("document.json");
        fs::write(&path, DOCUMENT).unwrap();
        path
    }

    fn padding_bound(path: &Path) -> bool {
        MemoryHost::load(path)
            .unwrap()
            .node_snapshot("2:1")
            .map(|node| node.bound_variable(BindableProperty::PaddingLeft).is_some())
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn test_link_writes_bindings_back() {
        let dir = tempdir().unwrap();
        let path = document_file(&dir);
        let request = LinkRequest {
            collection: Some(TOKEN),
            ..Default::default()
        };

        let outcome = link(&path, request, PluginConfig::default()).await.unwrap();

        assert!(outcome.report().unwrap().any_bound());
        assert!(padding_bound(&path));
        let host = MemoryHost::load(&path).unwrap();
        assert_eq!(host.plugin_data(COLLECTION_KEY), TOKEN);
    }

    #[tokio::test]
    async fn test_dry_run_leaves_document_untouched() {
        let dir = tempdir().unwrap();
        let path = document_file(&dir);
        let report_path = dir.path().join("report.json");
        let request = LinkRequest {
            collection: Some(TOKEN),
            report: Some(&report_path),
            dry_run: true,
        };

        link(&path, request, PluginConfig::default()).await.unwrap();

        assert!(!padding_bound(&path));
        let report: LinkReport =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(report.bindings.len(), 1);
    }

    #[tokio::test]
    async fn test_link_without_collection_shows_picker() {
        let dir = tempdir().unwrap();
        let path = document_file(&dir);

        let outcome = link(&path, LinkRequest::default(), PluginConfig::default())
            .await
            .unwrap();

        assert_eq!(outcome, CommandOutcome::PickerShown);
        assert!(!padding_bound(&path));
    }

    #[tokio::test]
    async fn test_set_collection_persists_token() {
        let dir = tempdir().unwrap();
        let path = document_file(&dir);

        set_collection(&path, TOKEN, PluginConfig::default())
            .await
            .unwrap();

        let host = MemoryHost::load(&path).unwrap();
        assert_eq!(host.plugin_data(COLLECTION_KEY), TOKEN);
    }

    #[tokio::test]
    async fn test_missing_document_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(collections(&dir.path().join("missing.json")).await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_node_ids_fail_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("document.json");
        fs::write(
            &path,
            r#"{
                "selection": ["2:1"],
                "nodes": [{
                    "id": "2:1", "name": "Card", "type": "FRAME",
                    "children": [{ "id": "2:1", "name": "Card", "type": "FRAME" }]
                }]
            }"#,
        )
        .unwrap();

        let result = link(&path, LinkRequest::default(), PluginConfig::default()).await;

        assert!(result.is_err());
    }
}
