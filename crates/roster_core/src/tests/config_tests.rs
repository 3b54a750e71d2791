use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn defaults_confirm_deletes() {
    let settings = Settings::default();
    assert_eq!(settings.window_title, "Employee Dashboard");
    assert!(settings.confirm_delete);
    assert_eq!(settings.seed_path, None);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn reads_partial_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SETTINGS_FILE_NAME);
    fs::write(
        &path,
        "window_title = \"Team Board\"\nseed_path = \"staff.json\"\n",
    )
    .expect("write settings");

    let settings = read_settings_file(&path).expect("settings");
    assert_eq!(settings.window_title, "Team Board");
    assert_eq!(settings.seed_path, Some(PathBuf::from("staff.json")));
    assert!(settings.confirm_delete);
}

#[test]
fn malformed_settings_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "confirm_delete = \"maybe\"").expect("write settings");

    let err = read_settings_file(&path).expect_err("bad bool");
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(load_settings(Some(dir.path().join("absent.toml").as_path())).is_err());
}

#[test]
fn env_overrides_replace_file_values() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("ROSTER__WINDOW_TITLE", "Ops Roster"),
            ("ROSTER__SEED_PATH", "/tmp/seed.json"),
            ("ROSTER__CONFIRM_DELETE", "off"),
            ("ROSTER__LOG_FILTER", "roster_core=debug"),
        ]),
    );
    assert_eq!(settings.window_title, "Ops Roster");
    assert_eq!(settings.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    assert!(!settings.confirm_delete);
    assert_eq!(settings.log_filter, "roster_core=debug");
}

#[test]
fn unparseable_flag_and_blank_seed_path() {
    let mut settings = Settings {
        seed_path: Some(PathBuf::from("old.json")),
        ..Settings::default()
    };
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("ROSTER__CONFIRM_DELETE", "sometimes"),
            ("ROSTER__SEED_PATH", "  "),
        ]),
    );
    assert!(settings.confirm_delete);
    assert_eq!(settings.seed_path, None);
}
