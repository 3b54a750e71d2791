use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE_NAME: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub seed_path: Option<PathBuf>,
    pub confirm_delete: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Employee Dashboard".into(),
            seed_path: None,
            confirm_delete: true,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// `RUST_LOG` takes precedence over the configured filter.
    pub fn log_directives(&self) -> String {
        match std::env::var("RUST_LOG") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => self.log_filter.clone(),
        }
    }
}

/// Defaults, then the first settings file found, then `ROSTER__*` environment overrides.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => match settings_file_candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => read_settings_file(&path)?,
            None => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("roster").join(SETTINGS_FILE_NAME));
    }
    candidates
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ROSTER__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = lookup("ROSTER__SEED_PATH") {
        settings.seed_path = if v.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(v))
        };
    }
    if let Some(v) = lookup("ROSTER__CONFIRM_DELETE") {
        if let Some(parsed) = parse_flag(&v) {
            settings.confirm_delete = parsed;
        }
    }
    if let Some(v) = lookup("ROSTER__LOG_FILTER") {
        settings.log_filter = v;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
