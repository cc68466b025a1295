// ABOUTME: Configuration file loading and flag resolution for the anicii CLI
// ABOUTME: Merges TOML config files beneath command-line flags with XDG path support

use crate::constants::defaults;
use anicii_sdk::constants::retry;
use anicii_sdk::TagCatalog;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional values read from `anicii.toml`. Every field can also be set
/// (and then wins) on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub nsfw: Option<bool>,
    #[serde(default)]
    pub interval: Option<u64>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub no_save: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub fill: Option<bool>,
    #[serde(default)]
    pub caption: Option<bool>,
    #[serde(default)]
    pub max_retries: Option<u32>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl FileConfig {
    /// Load configuration from standard locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from specific file paths; later paths override
    /// earlier ones, missing files are skipped.
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = FileConfig::default();

        for path in paths {
            if let Ok(file_config) = Self::load_from_file(path) {
                config = config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: FileConfig = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir.join(".config").join("anicii").join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home).join("anicii").join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join("anicii.toml").to_string_lossy().to_string());
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: FileConfig) -> FileConfig {
        FileConfig {
            nsfw: other.nsfw.or(self.nsfw),
            interval: other.interval.or(self.interval),
            output_dir: other.output_dir.or(self.output_dir),
            no_save: other.no_save.or(self.no_save),
            tags: other.tags.or(self.tags),
            color: other.color.or(self.color),
            fill: other.fill.or(self.fill),
            caption: other.caption.or(self.caption),
            max_retries: other.max_retries.or(self.max_retries),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }
}

/// Flag values captured from the parsed command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub nsfw: bool,
    pub interval: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub no_save: bool,
    pub tags: Vec<String>,
    pub color: bool,
    pub fill: bool,
    pub caption: bool,
}

/// The resolved, read-only configuration for one slideshow run.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowConfig {
    pub nsfw: bool,
    pub interval_secs: u64,
    pub output_dir: PathBuf,
    pub no_save: bool,
    pub custom_tags: Vec<String>,
    pub color: bool,
    pub fill: bool,
    pub caption: bool,
    pub max_retries: u32,
    pub timeout_ms: u64,
}

impl SlideshowConfig {
    /// Resolve flags over file values over defaults.
    ///
    /// Requesting any explicit-pool tag forces the effective NSFW flag on,
    /// regardless of what was supplied.
    pub fn resolve(cli: CliOverrides, file: FileConfig, catalog: &TagCatalog) -> Self {
        let custom_tags: Vec<String> = if cli.tags.is_empty() {
            file.tags.unwrap_or_default()
        } else {
            cli.tags
        };
        let custom_tags: Vec<String> = custom_tags
            .iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        let nsfw_requested = cli.nsfw || file.nsfw.unwrap_or(false);
        let nsfw = nsfw_requested || catalog.forces_nsfw(&custom_tags);
        if nsfw && !nsfw_requested {
            log::debug!("explicit tag requested, enabling nsfw results");
        }

        SlideshowConfig {
            nsfw,
            interval_secs: cli
                .interval
                .or(file.interval)
                .unwrap_or(defaults::INTERVAL_SECS),
            output_dir: cli
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(default_output_dir),
            no_save: cli.no_save || file.no_save.unwrap_or(false),
            custom_tags,
            color: cli.color || file.color.unwrap_or(false),
            fill: cli.fill || file.fill.unwrap_or(false),
            caption: cli.caption || file.caption.unwrap_or(false),
            max_retries: file.max_retries.unwrap_or(retry::MAX_ATTEMPTS),
            timeout_ms: file.timeout_ms.unwrap_or(defaults::TIMEOUT_MS),
        }
    }
}

fn default_output_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(defaults::OUTPUT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_gives_precedence_to_other() {
        let base = FileConfig {
            interval: Some(30),
            nsfw: Some(false),
            color: Some(true),
            ..Default::default()
        };
        let other = FileConfig {
            interval: Some(5),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.interval, Some(5));
        assert_eq!(merged.nsfw, Some(false));
        assert_eq!(merged.color, Some(true));
    }

    #[test]
    fn test_resolve_defaults() {
        let catalog = TagCatalog::builtin();
        let config =
            SlideshowConfig::resolve(CliOverrides::default(), FileConfig::default(), &catalog);

        assert!(!config.nsfw);
        assert_eq!(config.interval_secs, defaults::INTERVAL_SECS);
        assert!(!config.no_save);
        assert!(config.custom_tags.is_empty());
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout_ms, defaults::TIMEOUT_MS);
    }

    #[test]
    fn test_resolve_cli_wins_over_file() {
        let catalog = TagCatalog::builtin();
        let cli = CliOverrides {
            interval: Some(3),
            tags: vec!["maid".to_string()],
            ..Default::default()
        };
        let file = FileConfig {
            interval: Some(60),
            tags: Some(vec!["waifu".to_string()]),
            ..Default::default()
        };

        let config = SlideshowConfig::resolve(cli, file, &catalog);
        assert_eq!(config.interval_secs, 3);
        assert_eq!(config.custom_tags, vec!["maid".to_string()]);
    }

    #[test]
    fn test_resolve_promotes_nsfw_for_explicit_tags() {
        let catalog = TagCatalog::builtin();
        let cli = CliOverrides {
            tags: vec!["ero".to_string()],
            ..Default::default()
        };

        let config = SlideshowConfig::resolve(cli, FileConfig::default(), &catalog);
        assert!(config.nsfw);
    }

    #[test]
    fn test_resolve_no_promotion_for_general_tags() {
        let catalog = TagCatalog::builtin();
        let cli = CliOverrides {
            tags: vec!["waifu".to_string(), "maid".to_string()],
            ..Default::default()
        };

        let config = SlideshowConfig::resolve(cli, FileConfig::default(), &catalog);
        assert!(!config.nsfw);
    }

    #[test]
    fn test_resolve_trims_and_drops_empty_tags() {
        let catalog = TagCatalog::builtin();
        let cli = CliOverrides {
            tags: vec![" waifu ".to_string(), "".to_string(), "maid".to_string()],
            ..Default::default()
        };

        let config = SlideshowConfig::resolve(cli, FileConfig::default(), &catalog);
        assert_eq!(
            config.custom_tags,
            vec!["waifu".to_string(), "maid".to_string()]
        );
    }

    #[test]
    fn test_load_from_file_parses_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anicii.toml");
        std::fs::write(
            &path,
            r#"
                nsfw = true
                interval = 15
                no_save = true
                tags = ["waifu"]
                color = true
                fill = false
                caption = true
                max_retries = 5
                timeout_ms = 2000
            "#,
        )
        .unwrap();

        let config = FileConfig::load_from_file(&path).unwrap();
        assert_eq!(config.nsfw, Some(true));
        assert_eq!(config.interval, Some(15));
        assert_eq!(config.no_save, Some(true));
        assert_eq!(config.tags, Some(vec!["waifu".to_string()]));
        assert_eq!(config.max_retries, Some(5));
        assert_eq!(config.timeout_ms, Some(2000));
    }

    #[test]
    fn test_load_from_paths_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.toml");
        std::fs::write(&present, "interval = 7\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let config = FileConfig::load_from_paths(&[
            missing.to_str().unwrap(),
            present.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(config.interval, Some(7));
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "interval = [not toml").unwrap();

        assert!(FileConfig::load_from_file(&path).is_err());
    }
}
