// LandSearch - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and validation
// 3. Logging initialisation (debug mode support)
// 4. Headless CSV export, or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use landsearch::app;

pub use landsearch::core;
pub use landsearch::platform;
pub use landsearch::ui;
pub use landsearch::util;

use clap::Parser;
use std::path::{Path, PathBuf};

/// Configure fonts for the egui context.
///
/// egui's built-in fonts have no Devanagari glyphs, so Marathi labels and
/// record text would render as squares. The configured font file is tried
/// first, then the platform candidates; the first one that loads is appended
/// to both families as a fallback so Latin text keeps the egui defaults.
fn configure_fonts(ctx: &egui::Context, font_path: Option<&Path>) {
    let candidates = font_path
        .into_iter()
        .map(Path::to_path_buf)
        .chain(
            util::constants::DEVANAGARI_FONT_CANDIDATES
                .iter()
                .map(PathBuf::from),
        );

    for path in candidates {
        match platform::fs::read_font_file(&path) {
            Ok(data) => {
                let name = "Devanagari".to_owned();
                let mut fonts = egui::FontDefinitions::default();
                fonts
                    .font_data
                    .insert(name.clone(), egui::FontData::from_owned(data).into());
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    if let Some(list) = fonts.families.get_mut(&family) {
                        list.push(name.clone());
                    }
                }
                ctx.set_fonts(fonts);
                tracing::info!(font = %path.display(), "Devanagari font configured");
                return;
            }
            Err(e) => {
                tracing::debug!(font = %path.display(), error = %e, "Font candidate unavailable");
            }
        }
    }

    tracing::warn!("No Devanagari font found; Marathi text may render as squares");
}

/// LandSearch - search and export land layout records.
///
/// Loads a JSON dataset of land records and opens the search window. With
/// `--export` no window is opened: the records matching the given criteria
/// are written straight to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "LandSearch", version, about)]
struct Cli {
    /// Dataset file (defaults to the config value, then ./data.json).
    data_file: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Write matching records to this CSV file and exit without a window.
    #[arg(long = "export", value_name = "OUT.csv")]
    export: Option<PathBuf>,

    /// Taluka to match exactly.
    #[arg(long)]
    taluka: Option<String>,

    /// Village to match exactly.
    #[arg(long)]
    village: Option<String>,

    /// Case-insensitive substring of the holder name.
    #[arg(long = "holder-name")]
    holder_name: Option<String>,

    /// Case-insensitive substring of the survey number.
    #[arg(long = "survey-no")]
    survey_no: Option<String>,

    /// Year to match exactly.
    #[arg(long)]
    year: Option<String>,

    /// Land type to match exactly.
    #[arg(long = "type")]
    land_type: Option<String>,
}

impl Cli {
    /// Search criteria from the flags, with the same input cleaning as the
    /// search form.
    fn criteria(&self) -> core::filter::Criteria {
        core::filter::Criteria {
            taluka: self.taluka.clone().unwrap_or_default(),
            village: self.village.clone().unwrap_or_default(),
            holder_name: core::input::sanitize_holder_name(
                self.holder_name.as_deref().unwrap_or_default(),
            ),
            survey_no: core::input::sanitize_survey_no(
                self.survey_no.as_deref().unwrap_or_default(),
            ),
            year: self.year.clone().unwrap_or_default(),
            land_type: self.land_type.clone().unwrap_or_default(),
        }
    }
}

/// Load, filter and export without a window. Returns the number of rows
/// written.
fn run_headless(
    data_path: &Path,
    criteria: &core::filter::Criteria,
    out: &Path,
    quoting: core::export::CsvQuoting,
) -> util::error::Result<usize> {
    let records = platform::fs::read_dataset(data_path)?;
    let matches = core::filter::filter_records(&records, criteria);
    tracing::info!(
        total = records.len(),
        matches = matches.len(),
        "Headless search complete"
    );
    let rows = platform::fs::write_csv_export(&matches, out, quoting)?;
    Ok(rows)
}

fn main() {
    let cli = Cli::parse();

    // Config first: it may carry the log level.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "LandSearch starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Data file: CLI > config > default
    let data_path = cli
        .data_file
        .clone()
        .or_else(|| config.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(util::constants::DEFAULT_DATA_FILE));

    if let Some(ref out) = cli.export {
        match run_headless(&data_path, &cli.criteria(), out, config.csv_quoting) {
            Ok(rows) => {
                println!("Exported {rows} records to {}", out.display());
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Headless export failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    // Create application state
    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let font_path = config.font_path.clone();
    let mut state = app::state::AppState::new(config, data_path);
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx, font_path.as_deref());
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::LandSearchApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LandSearch GUI: {e}");
        std::process::exit(1);
    }
}
