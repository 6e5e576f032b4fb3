//! Tests for the command implementations.

use super::duplicate::cmd_duplicate;
use super::list::render_list;
use super::migrate::cmd_migrate;
use super::reset::cmd_reset;
use super::show::render_show;
use super::status::render_status;
use crate::cli::{DuplicateArgs, MigrateArgs, ResetArgs};
use crate::config::Config;
use crate::configuration::{Configuration, LayerState};
use crate::context::{AppContext, Origin};
use crate::error::LayerConfError;
use crate::test_support::*;
use std::path::Path;
use tempfile::TempDir;

const VALIDATION_MANIFEST: &str = r#"{
    "file_format_version": "1.2.0",
    "layer": {
        "name": "VK_LAYER_KHRONOS_validation",
        "description": "Khronos validation",
        "settings": [
            { "key": "duplicate_message_limit", "type": "INT", "default": 10 },
            { "key": "report_flags", "type": "FLAGS", "default": ["error", "warn"] }
        ]
    }
}"#;

const BUILTIN_VALIDATION: &str = r#"{
    "file_format_version": "2.2.0",
    "configuration": {
        "name": "Validation",
        "description": "Catch API misuse",
        "layers": [
            {
                "name": "VK_LAYER_KHRONOS_validation",
                "rank": 0,
                "state": "OVERRIDDEN",
                "settings": [
                    { "key": "duplicate_message_limit", "type": "INT", "value": 3 }
                ]
            }
        ]
    }
}"#;

const LEGACY_API_DUMP: &str = r#"{
    "file_format_version": "2.0.2",
    "API dump": {
        "name": "API dump",
        "description": "",
        "layer_options": {
            "VK_LAYER_LUNARG_api_dump": { "layer_rank": 0 }
        },
        "blacklisted_layers": ["VK_LAYER_LUNARG_monitor"]
    }
}"#;

/// Temporary storage roots with one layer manifest, one built-in and one
/// legacy configuration.
fn setup() -> (TempDir, AppContext) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(&root.join("layers"), "validation.json", VALIDATION_MANIFEST);
    write_file(&root.join("builtin"), "Validation.json", BUILTIN_VALIDATION);
    write_file(&root.join("legacy"), "API dump.json", LEGACY_API_DUMP);

    let config = Config {
        configurations_dir: dir_string(root, "saved"),
        legacy_configurations_dir: dir_string(root, "legacy"),
        builtin_configurations_dir: dir_string(root, "builtin"),
        layers_dir: dir_string(root, "layers"),
    };
    let ctx = AppContext::from_config(&config).unwrap();
    (temp_dir, ctx)
}

fn dir_string(root: &Path, name: &str) -> String {
    root.join(name).to_string_lossy().into_owned()
}

fn read_document(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_context_registers_layers_from_manifests() {
    let (_temp_dir, ctx) = setup();
    assert_eq!(ctx.layers.len(), 1);
    assert_eq!(ctx.layers[0].key, VALIDATION);
}

#[test]
fn test_resolve_configuration_search_order() {
    let (temp_dir, ctx) = setup();

    let builtin = ctx.resolve_configuration("Validation").unwrap();
    assert_eq!(builtin.origin, Origin::BuiltIn);

    let legacy = ctx.resolve_configuration("API dump").unwrap();
    assert_eq!(legacy.origin, Origin::Legacy);

    write_file(&temp_dir.path().join("saved"), "Validation.json", BUILTIN_VALIDATION);
    let saved = ctx.resolve_configuration("Validation").unwrap();
    assert_eq!(saved.origin, Origin::Saved);

    let by_path = temp_dir.path().join("legacy").join("API dump.json");
    let file = ctx
        .resolve_configuration(by_path.to_str().unwrap())
        .unwrap();
    assert_eq!(file.origin, Origin::File);
    assert_eq!(file.configuration.key, "API dump");
}

#[test]
fn test_resolve_unknown_configuration_is_user_error() {
    let (_temp_dir, ctx) = setup();
    let err = ctx.resolve_configuration("Nope").unwrap_err();

    assert!(matches!(err, LayerConfError::UserError(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("layerconf list"));
}

#[test]
fn test_list_merges_all_sources() {
    let (_temp_dir, ctx) = setup();
    let all = ctx.all_configurations().unwrap();

    let names: Vec<&str> = all.iter().map(|c| c.configuration.key.as_str()).collect();
    assert_eq!(names, vec!["API dump", "Validation"]);

    let rendered = render_list(&all);
    assert!(rendered.contains("[legacy]"));
    assert!(rendered.contains("[built-in]"));
    assert!(rendered.contains("overrides layers"));
    assert!(rendered.contains("2 configuration(s)"));
}

#[test]
fn test_show_lists_layers_and_settings() {
    let (_temp_dir, ctx) = setup();
    let located = ctx.resolve_configuration("Validation").unwrap();

    let rendered = render_show(&located);

    assert!(rendered.contains("Validation [built-in]"));
    assert!(rendered.contains("Description: Catch API misuse"));
    assert!(rendered.contains("OVERRIDDEN"));
    assert!(rendered.contains(VALIDATION));
    assert!(rendered.contains("duplicate_message_limit (INT) = 3"));
    // Declared by the manifest, not present in the file.
    assert!(rendered.contains("report_flags (FLAGS) = error,warn"));
}

#[test]
fn test_status_reports_overrides() {
    let (_temp_dir, ctx) = setup();

    let legacy = ctx.resolve_configuration("API dump").unwrap();
    let rendered = render_status(&legacy.configuration);
    assert!(rendered.contains("1 forced on, 1 forced off"));

    let rendered = render_status(&Configuration::new());
    assert!(rendered.contains("no overrides"));
}

#[test]
fn test_migrate_writes_current_format() {
    let (temp_dir, ctx) = setup();
    let input = temp_dir.path().join("legacy").join("API dump.json");
    let output = temp_dir.path().join("out").join("API dump.json");

    cmd_migrate(
        &ctx,
        MigrateArgs {
            input: input.clone(),
            output: Some(output.clone()),
        },
    )
    .unwrap();

    let document = read_document(&output);
    assert_eq!(document["file_format_version"], "2.2.0");
    assert_eq!(document["configuration"]["name"], "API dump");
    // Input is untouched when an output is given.
    assert_eq!(read_document(&input)["file_format_version"], "2.0.2");

    let migrated = Configuration::from_file(&ctx.layers, &output).unwrap();
    let original = Configuration::from_file(&ctx.layers, &input).unwrap();
    assert_eq!(migrated, original);
}

#[test]
fn test_migrate_in_place() {
    let (temp_dir, ctx) = setup();
    let input = temp_dir.path().join("legacy").join("API dump.json");

    cmd_migrate(
        &ctx,
        MigrateArgs {
            input: input.clone(),
            output: None,
        },
    )
    .unwrap();

    assert_eq!(read_document(&input)["file_format_version"], "2.2.0");
}

#[test]
fn test_duplicate_saves_unique_copy() {
    let (temp_dir, ctx) = setup();

    let args = || DuplicateArgs {
        configuration: "Validation".to_string(),
        new_name: None,
    };
    cmd_duplicate(&ctx, args()).unwrap();
    cmd_duplicate(&ctx, args()).unwrap();

    let saved = temp_dir.path().join("saved");
    assert!(saved.join("Validation (2).json").is_file());
    assert!(saved.join("Validation (3).json").is_file());

    let copy = Configuration::from_file(&ctx.layers, saved.join("Validation (3).json")).unwrap();
    assert_eq!(copy.key, "Validation (3)");
    assert_eq!(copy.description, "Catch API misuse");
}

#[test]
fn test_duplicate_with_requested_name() {
    let (temp_dir, ctx) = setup();

    cmd_duplicate(
        &ctx,
        DuplicateArgs {
            configuration: "API dump".to_string(),
            new_name: Some("Mine".to_string()),
        },
    )
    .unwrap();

    assert!(temp_dir.path().join("saved").join("Mine.json").is_file());
}

#[test]
fn test_reset_restores_builtin_over_saved_edits() {
    let (temp_dir, ctx) = setup();
    let saved_path = ctx.save_path("Validation");

    let mut edited = ctx.resolve_configuration("Validation").unwrap().configuration;
    edited.description = "edited".to_string();
    edited.parameters[0].state = LayerState::Excluded;
    edited.save(&saved_path).unwrap();

    cmd_reset(
        &ctx,
        ResetArgs {
            name: "Validation".to_string(),
        },
    )
    .unwrap();

    let reset = Configuration::from_file(&ctx.layers, &saved_path).unwrap();
    let builtin = Configuration::from_file(
        &ctx.layers,
        temp_dir.path().join("builtin").join("Validation.json"),
    )
    .unwrap();
    assert_eq!(reset, builtin);
}

#[test]
fn test_reset_unknown_name_fails() {
    let (_temp_dir, ctx) = setup();
    let err = cmd_reset(
        &ctx,
        ResetArgs {
            name: "Nope".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, LayerConfError::UserError(_)));
}
