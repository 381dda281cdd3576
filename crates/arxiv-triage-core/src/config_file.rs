use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_BASE_URL;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

/// Fully resolved settings after applying file, env and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            theme: "hacker".to_string(),
        }
    }
}

/// Platform config directory path: `<config_dir>/arxiv-triage/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("arxiv-triage").join("config.toml"))
}

/// Load config by cascading CWD `.arxiv-triage.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".arxiv-triage.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        server: Some(ServerConfig {
            base_url: overlay
                .server
                .as_ref()
                .and_then(|s| s.base_url.clone())
                .or_else(|| base.server.as_ref().and_then(|s| s.base_url.clone())),
            timeout_secs: overlay
                .server
                .as_ref()
                .and_then(|s| s.timeout_secs)
                .or_else(|| base.server.as_ref().and_then(|s| s.timeout_secs)),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

/// Fill `settings` from the file config.
/// Only sets values that are `Some` in the file config (doesn't overwrite with defaults).
pub fn apply_to_settings(file_cfg: &ConfigFile, settings: &mut Settings) {
    if let Some(server) = &file_cfg.server {
        if let Some(ref url) = server.base_url {
            if !url.is_empty() {
                settings.base_url = url.clone();
            }
        }
        if let Some(secs) = server.timeout_secs {
            settings.timeout = Duration::from_secs(secs.max(1));
        }
    }
    if let Some(disp) = &file_cfg.display {
        if let Some(ref theme) = disp.theme {
            if !theme.is_empty() {
                settings.theme = theme.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(url: Option<&str>, timeout: Option<u64>) -> ConfigFile {
        ConfigFile {
            server: Some(ServerConfig {
                base_url: url.map(String::from),
                timeout_secs: timeout,
            }),
            display: None,
        }
    }

    #[test]
    fn overlay_wins_field_by_field() {
        let base = server(Some("http://base:1"), Some(5));
        let overlay = server(None, Some(9));
        let merged = merge(base, overlay);
        let s = merged.server.unwrap();
        assert_eq!(s.base_url.as_deref(), Some("http://base:1"));
        assert_eq!(s.timeout_secs, Some(9));
    }

    #[test]
    fn apply_keeps_defaults_for_missing_fields() {
        let mut settings = Settings::default();
        apply_to_settings(&server(None, Some(0)), &mut settings);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        // Zero is clamped so requests never time out instantly.
        assert_eq!(settings.timeout, Duration::from_secs(1));
        assert_eq!(settings.theme, "hacker");
    }

    #[test]
    fn empty_strings_are_ignored() {
        let mut settings = Settings::default();
        let cfg = ConfigFile {
            server: Some(ServerConfig {
                base_url: Some(String::new()),
                timeout_secs: None,
            }),
            display: Some(DisplayConfig {
                theme: Some(String::new()),
            }),
        };
        apply_to_settings(&cfg, &mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn loads_toml_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://papers.local:9000\"\n\n[display]\ntheme = \"modern\"\n",
        )
        .unwrap();

        let cfg = load_from_path(&path).unwrap();
        let mut settings = Settings::default();
        apply_to_settings(&cfg, &mut settings);
        assert_eq!(settings.base_url, "http://papers.local:9000");
        assert_eq!(settings.theme, "modern");
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn malformed_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbase_url = ").unwrap();
        assert!(load_from_path(&path).is_none());
    }
}
