// LandSearch - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LandSearch";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LandSearch";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Data source
// =============================================================================

/// Data file used when neither the CLI nor config.toml names one.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Maximum size of the data file in bytes. Larger files are rejected before
/// reading so a mistaken path cannot exhaust memory.
pub const MAX_DATA_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64 MB

// =============================================================================
// Search and pagination
// =============================================================================

/// Records shown per results page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Smallest configurable page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest configurable page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// Simulated round-trip latency applied before a search runs (ms).
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1_000;

/// Upper bound on the configurable search delay (ms).
pub const MAX_SEARCH_DELAY_MS: u64 = 10_000;

// =============================================================================
// Notifications
// =============================================================================

/// How long a success notification stays visible (ms).
pub const SUCCESS_NOTICE_MS: u64 = 3_000;

/// How long an error notification stays visible (ms).
pub const ERROR_NOTICE_MS: u64 = 5_000;

/// Maximum notifications kept at once; the oldest is dropped beyond this.
pub const MAX_NOTIFICATIONS: usize = 5;

// =============================================================================
// Export
// =============================================================================

/// Default file name offered for CSV export.
pub const EXPORT_FILE_NAME: &str = "land_records_search_results.csv";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// System font files tried, in order, for Devanagari glyph coverage.
/// egui's built-in fonts have no Devanagari block.
pub const DEVANAGARI_FONT_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\Nirmala.ttf",
    r"C:\Windows\Fonts\mangal.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    "/System/Library/Fonts/Supplemental/Devanagari Sangam MN.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
];

/// Maximum size of a font file loaded from disk.
pub const MAX_FONT_FILE_SIZE: u64 = 32 * 1024 * 1024; // 32 MB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
