// LandSearch - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::CsvQuoting;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LandSearch configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/landsearch/ or %APPDATA%\LandSearch\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub data: DataSection,
    pub search: SearchSection,
    pub ui: UiSection,
    pub export: ExportSection,
    pub logging: LoggingSection,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Path of the JSON data file.
    pub path: Option<String>,
}

/// `[search]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Records per results page.
    pub page_size: Option<usize>,
    /// Simulated latency before a search runs, in ms.
    pub delay_ms: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Font file with Devanagari coverage, tried before the built-in candidates.
    pub font_path: Option<String>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Quote handling: "standard" or "literal".
    pub quoting: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Data --
    /// Data file path; `None` means use the default file name.
    pub data_path: Option<PathBuf>,

    // -- Search --
    pub page_size: usize,
    pub search_delay_ms: u64,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    pub font_path: Option<PathBuf>,

    // -- Export --
    pub csv_quoting: CsvQuoting,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: constants::DEFAULT_PAGE_SIZE,
            search_delay_ms: constants::DEFAULT_SEARCH_DELAY_MS,
            dark_mode: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            font_path: None,
            csv_quoting: CsvQuoting::default(),
            log_level: None,
        }
    }
}

/// Load and validate config.toml at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    validate(raw)
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    let mut reject = |field: &str, value: String, expected: String, default: String| {
        let err = ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value,
            expected,
        };
        warnings.push(format!("{err}. Using default ({default})."));
    };

    // -- Data: path --
    if let Some(path) = raw.data.path.filter(|p| !p.trim().is_empty()) {
        config.data_path = Some(PathBuf::from(path));
    }

    // -- Search: page_size --
    if let Some(size) = raw.search.page_size {
        if (constants::MIN_PAGE_SIZE..=constants::MAX_PAGE_SIZE).contains(&size) {
            config.page_size = size;
        } else {
            reject(
                "search.page_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_PAGE_SIZE, constants::MAX_PAGE_SIZE),
                constants::DEFAULT_PAGE_SIZE.to_string(),
            );
        }
    }

    // -- Search: delay_ms --
    if let Some(delay) = raw.search.delay_ms {
        if delay <= constants::MAX_SEARCH_DELAY_MS {
            config.search_delay_ms = delay;
        } else {
            reject(
                "search.delay_ms",
                delay.to_string(),
                format!("0-{}", constants::MAX_SEARCH_DELAY_MS),
                constants::DEFAULT_SEARCH_DELAY_MS.to_string(),
            );
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => reject(
                "ui.theme",
                other.to_string(),
                "\"dark\" or \"light\"".to_string(),
                "light".to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            reject(
                "ui.font_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
                constants::DEFAULT_FONT_SIZE.to_string(),
            );
        }
    }

    // -- UI: font_path --
    if let Some(path) = raw.ui.font_path.filter(|p| !p.trim().is_empty()) {
        config.font_path = Some(PathBuf::from(path));
    }

    // -- Export: quoting --
    if let Some(ref quoting) = raw.export.quoting {
        match CsvQuoting::from_name(quoting) {
            Some(q) => config.csv_quoting = q,
            None => reject(
                "export.quoting",
                quoting.clone(),
                "\"standard\" or \"literal\"".to_string(),
                "standard".to_string(),
            ),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            reject(
                "logging.level",
                level.clone(),
                "error, warn, info, debug, trace".to_string(),
                constants::DEFAULT_LOG_LEVEL.to_string(),
            );
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> (AppConfig, Vec<String>) {
        validate(toml::from_str(content).unwrap())
    }

    #[test]
    fn test_empty_config_is_default() {
        let (config, warnings) = parse("");
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = parse(
            r#"
            [data]
            path = "records/data.json"

            [search]
            page_size = 25
            delay_ms = 0

            [ui]
            theme = "Dark"
            font_size = 16.0

            [export]
            quoting = "literal"

            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.data_path, Some(PathBuf::from("records/data.json")));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.search_delay_ms, 0);
        assert!(config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.csv_quoting, CsvQuoting::Literal);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let (config, warnings) = parse(
            r#"
            [search]
            page_size = 0
            delay_ms = 60000

            [ui]
            theme = "solarized"

            [export]
            quoting = "excel"
            "#,
        );
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(config.search_delay_ms, constants::DEFAULT_SEARCH_DELAY_MS);
        assert_eq!(config.csv_quoting, CsvQuoting::Standard);
        assert!(warnings[0].contains("search.page_size"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_, warnings) = parse("[future]\nflag = true\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unparseable_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\npage_size = ").unwrap();
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
    }
}
