use std::{
    fs,
    sync::atomic::{AtomicU64, Ordering},
};

use super::*;

/// Create a unique temporary directory for each test.
fn test_dir() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("symdoc_config_test_{}_{id}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults() {
    let settings = GeneratorSettings::default();
    assert_eq!(settings.output.directory, PathBuf::from("out"));
    assert_eq!(settings.output.root_name, "docs");
    assert!(!settings.output.slim);
    assert_eq!(settings.output.slim_file(), PathBuf::from("out").join("docs.md"));
    assert!(!settings.pages.method_group_spacing);
    assert!(settings.pages.include_protected);
    assert_eq!(settings.logging.level, LogLevel::Info);
    assert_eq!(settings.thread_pool.worker_threads, 0);
}

#[test]
fn root_level_tables_are_applied() {
    let settings = GeneratorSettings::from_toml_str(
        r#"
[output]
directory = "site"
root_name = "api"
slim = true

[pages]
method_group_spacing = true
include_protected = false

[logging]
level = "debug"

[thread_pool]
worker_threads = 4
"#,
    )
    .unwrap();

    assert_eq!(settings.output.directory, PathBuf::from("site"));
    assert_eq!(settings.output.root_name, "api");
    assert!(settings.output.slim);
    assert!(settings.pages.method_group_spacing);
    assert!(!settings.pages.include_protected);
    assert_eq!(settings.logging.level, LogLevel::Debug);
    assert_eq!(settings.thread_pool.worker_threads, 4);
    assert_eq!(settings.pages.page_options(), crate::pages::PageOptions {
        method_group_spacing: true,
    });
}

#[test]
fn scoped_table_overrides_root_level() {
    let settings = GeneratorSettings::from_toml_str(
        r#"
[output]
root_name = "outer"
slim = true

[symdoc.output]
root_name = "inner"
"#,
    )
    .unwrap();

    assert_eq!(settings.output.root_name, "inner");
    assert!(settings.output.slim);
}

#[test]
fn unknown_keys_are_ignored() {
    let settings = GeneratorSettings::from_toml_str(
        r#"
title = "not ours"

[output]
root_name = "api"
colour = "blue"

[lint]
strict = true
"#,
    )
    .unwrap();

    assert_eq!(settings.output.root_name, "api");
}

#[test]
fn malformed_table_is_skipped_without_failing() {
    let settings = GeneratorSettings::from_toml_str(
        r#"
[output]
slim = "yes"

[symdoc.pages]
method_group_spacing = true
"#,
    )
    .unwrap();

    assert!(!settings.output.slim);
    assert!(settings.pages.method_group_spacing);
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(GeneratorSettings::from_toml_str("[output\nslim = true").is_err());
}

#[test]
fn worker_threads_are_clamped() {
    let settings = GeneratorSettings::from_toml_str("[thread_pool]\nworker_threads = 1000\n").unwrap();
    assert_eq!(settings.thread_pool.worker_threads, MAX_WORKER_THREADS);

    let automatic = GeneratorSettings::default();
    let resolved = automatic.thread_pool.resolved_worker_threads();
    assert!((MIN_WORKER_THREADS..=MAX_WORKER_THREADS).contains(&resolved));
}

#[test]
fn blank_names_fall_back_to_defaults() {
    let settings = GeneratorSettings::from_toml_str(
        r#"
[output]
root_name = " / "
slim_file_name = "  "
directory = ""
"#,
    )
    .unwrap();

    assert_eq!(settings.output.root_name, DEFAULT_ROOT_NAME);
    assert_eq!(settings.output.slim_file_name, DEFAULT_SLIM_FILE_NAME);
    assert_eq!(settings.output.directory, PathBuf::from(DEFAULT_OUTPUT_DIRECTORY));
}

#[test]
fn root_name_is_trimmed_of_slashes() {
    let mut settings = GeneratorSettings::default();
    settings.output.root_name = "/reference/".to_string();
    settings.normalize();
    assert_eq!(settings.output.root_name, "reference");
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let dir = test_dir();
    assert!(matches!(GeneratorSettings::load(&dir.join("absent.toml")), Err(GenerateError::Read { .. })));

    let bad = dir.join(SETTINGS_FILE_NAME);
    fs::write(&bad, "[output\n").unwrap();
    assert!(matches!(GeneratorSettings::load(&bad), Err(GenerateError::Settings { .. })));

    fs::write(&bad, "[output]\nroot_name = \"api\"\n").unwrap();
    assert_eq!(GeneratorSettings::load(&bad).unwrap().output.root_name, "api");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn find_settings_file_in_same_dir() {
    let dir = test_dir();
    let settings_path = dir.join(SETTINGS_FILE_NAME);
    fs::write(&settings_path, "").unwrap();
    let model = dir.join("model.json");
    fs::write(&model, "{}").unwrap();

    assert_eq!(find_settings_file(&model), Some(settings_path.clone()));
    assert_eq!(find_settings_file(&dir), Some(settings_path));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn find_settings_file_in_parent_dir() {
    let dir = test_dir();
    let settings_path = dir.join(SETTINGS_FILE_NAME);
    fs::write(&settings_path, "").unwrap();
    let nested = dir.join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_settings_file(&nested), Some(settings_path));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn find_settings_file_returns_none_when_missing() {
    let dir = test_dir();
    let model = dir.join("model.json");
    fs::write(&model, "{}").unwrap();

    // Nothing here; the walk ends at the filesystem root.
    assert!(find_settings_file(&model).is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn log_levels_map_to_filter_directives() {
    let settings = GeneratorSettings::from_toml_str("[logging]\nlevel = \"trace\"\n").unwrap();
    assert_eq!(settings.logging.level.as_filter(), "trace");
    assert_eq!(LogLevel::Warn.as_filter(), "warn");
    assert!(LogLevel::Error < LogLevel::Debug);

    // An unknown level invalidates the table and leaves the default in place.
    let settings = GeneratorSettings::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
    assert_eq!(settings.logging.level, LogLevel::Info);
}
