//! # EaglePanel
//!
//! Command-line panelizer for EAGLE CAD board files. Tiles one `.brd` board
//! into a `cols` x `rows` manufacturing panel with a shared outline, merged
//! V-score lines, and optional corner mounting holes.
//!
//! ## Architecture
//!
//! EaglePanel is organized as a workspace with multiple crates:
//!
//! 1. **eaglepanel-core** - Document tree and geometry value types
//! 2. **eaglepanel-panelizer** - The panelization engine
//! 3. **eaglepanel-brd** - `.brd` XML reading and writing
//! 4. **eaglepanel-settings** - JSON/TOML settings files
//! 5. **eaglepanel** - This binary, which wires the crates together

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use eaglepanel_panelizer::Panelizer;
use eaglepanel_settings::PanelSettings;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use eaglepanel_core::{Document, Element};
pub use eaglepanel_panelizer::{panelize, PanelConfig, PanelizeError, PlainCopy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string shown by `--version`
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// File name that means "read standard input"
pub const STDIN_MARKER: &str = "-";

/// Command-line options
#[derive(Debug, Parser)]
#[command(
    name = "eaglepanel",
    version,
    long_version = LONG_VERSION,
    about = "Tile an EAGLE board into a cols x rows manufacturing panel"
)]
pub struct Cli {
    /// Number of board columns
    #[arg(long, value_name = "N")]
    pub cols: Option<u32>,

    /// Number of board rows
    #[arg(long, value_name = "N")]
    pub rows: Option<u32>,

    /// Gap between columns (mm)
    #[arg(long = "colspacing", value_name = "MM", allow_negative_numbers = true)]
    pub col_spacing: Option<f64>,

    /// Gap between rows (mm)
    #[arg(long = "rowspacing", value_name = "MM", allow_negative_numbers = true)]
    pub row_spacing: Option<f64>,

    /// Frame margin above and below the boards (mm)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub hframe: Option<f64>,

    /// Frame margin left and right of the boards (mm)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub vframe: Option<f64>,

    /// Horizontal inset of the corner mounting holes (mm)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub hole_offset_x: Option<f64>,

    /// Vertical inset of the corner mounting holes (mm)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub hole_offset_y: Option<f64>,

    /// Drill diameter of the corner mounting holes (mm)
    #[arg(long = "drill", value_name = "MM", allow_negative_numbers = true)]
    pub drill_diameter: Option<f64>,

    /// Settings file (.json or .toml); flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write panels to standard output instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Board files to panelize ("-" reads standard input)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Initialize logging
///
/// Logs go to stderr so that `--stdout` output stays a clean board file.
/// `RUST_LOG` takes precedence over the `-v` level.
pub fn init_logging(verbosity: u8) -> Result<()> {
    use tracing::Level;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(verbosity > 0)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Merge the settings file (if any) with command-line overrides
pub fn resolve_settings(cli: &Cli) -> Result<PanelSettings> {
    let mut settings = match &cli.config {
        Some(path) => PanelSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => PanelSettings::default(),
    };

    let panel = &mut settings.panel;
    override_with(&mut panel.cols, cli.cols);
    override_with(&mut panel.rows, cli.rows);
    override_with(&mut panel.col_spacing, cli.col_spacing);
    override_with(&mut panel.row_spacing, cli.row_spacing);
    override_with(&mut panel.hframe, cli.hframe);
    override_with(&mut panel.vframe, cli.vframe);
    override_with(&mut panel.hole_offset_x, cli.hole_offset_x);
    override_with(&mut panel.hole_offset_y, cli.hole_offset_y);
    override_with(&mut panel.drill_diameter, cli.drill_diameter);

    settings.validate().context("Invalid panel settings")?;
    Ok(settings)
}

fn override_with<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Output file for `input`: `<stem><suffix>.<ext>` in the same directory
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "board".into());
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}

/// Run the command line
pub fn run(cli: &Cli) -> Result<()> {
    let settings = resolve_settings(cli)?;
    debug!("Panel settings: {:?}", settings);
    let panelizer = Panelizer::new(settings.panel.clone()).context("Invalid panel settings")?;

    for input in &cli.files {
        panelize_file(&panelizer, input, &settings.output.suffix, cli.stdout)?;
    }
    Ok(())
}

/// Panelize a single file and return where the panel was written
/// (`None` for standard output)
pub fn panelize_file(
    panelizer: &Panelizer,
    input: &Path,
    suffix: &str,
    to_stdout: bool,
) -> Result<Option<PathBuf>> {
    let from_stdin = input.as_os_str() == STDIN_MARKER;
    let source = if from_stdin {
        eaglepanel_brd::read_from(io::stdin().lock())
    } else {
        eaglepanel_brd::read_file(input)
    }
    .with_context(|| format!("Failed to read {}", input.display()))?;

    let panel = panelizer
        .panelize(&source)
        .with_context(|| format!("Failed to panelize {}", input.display()))?;

    if to_stdout || from_stdin {
        eaglepanel_brd::write_to(&panel, io::stdout().lock())
            .context("Failed to write panel to stdout")?;
        return Ok(None);
    }

    let output = output_path(input, suffix);
    eaglepanel_brd::write_file(&panel, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());
    Ok(Some(output))
}
