use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use log::{debug, info, warn};

pub mod config;
pub mod io;
pub mod model;
pub mod rendering;

use config::Config;
use model::layout;
use rendering::colormap::{parse_hex, Palette};
use rendering::table::{render, HeatmapOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot periodic trends as a heat map over the periodic table of elements", long_about = None)]
struct Cli {
    /// CSV (or spreadsheet) of element,value rows
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output image path (.png or .svg)
    #[arg(short, long, default_value = "ptable.png", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Width (in pixels) of the figure
    #[arg(long)]
    width: Option<u32>,

    /// Color palette for the heat map
    #[arg(long, value_enum)]
    palette: Option<PaletteOpt>,

    /// Alpha value for the color scale (ranges from 0 to 1)
    #[arg(long)]
    fill_alpha: Option<f64>,

    /// Include the lanthanides and actinides as separate rows
    /// (auto-enabled when the dataset contains any)
    #[arg(long)]
    extended: Option<bool>,

    /// Height (in pixels) of the color bar
    #[arg(long)]
    cbar_height: Option<u32>,

    /// Persist the effective width/palette/fill-alpha as new defaults
    #[arg(long, action = ArgAction::SetTrue)]
    save_defaults: bool,

    /// Verbose logging
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PaletteOpt {
    Plasma,
    Inferno,
    Magma,
    Viridis,
}

impl From<PaletteOpt> for Palette {
    fn from(value: PaletteOpt) -> Self {
        match value {
            PaletteOpt::Plasma => Palette::Plasma,
            PaletteOpt::Inferno => Palette::Inferno,
            PaletteOpt::Magma => Palette::Magma,
            PaletteOpt::Viridis => Palette::Viridis,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let (mut cfg, cfg_msg) = Config::load();
    debug!("{}", cfg_msg);

    // CLI options win over persisted defaults
    if let Some(width) = cli.width {
        cfg.width = width;
    }
    if let Some(palette) = cli.palette {
        cfg.palette = palette.into();
    }
    if let Some(alpha) = cli.fill_alpha {
        cfg.fill_alpha = alpha;
    }

    if cfg.width == 0 {
        bail!("--width must be a positive integer");
    }
    if !(0.0..=1.0).contains(&cfg.fill_alpha) {
        bail!("--fill-alpha must be between 0 and 1");
    }
    let blank_color = parse_hex(&cfg.blank_color)
        .ok_or_else(|| anyhow!("invalid blank_color '{}' in config", cfg.blank_color))?;

    let input = cli.input.to_string_lossy();
    let dataset =
        io::load_dataset(&input).with_context(|| format!("failed to load {}", input))?;
    info!("Loaded {} data rows from {}", dataset.rows.len(), input);

    let has_series_data = layout::wants_extended(dataset.symbols());
    let extended = cli.extended.unwrap_or(has_series_data);
    if has_series_data && !extended {
        warn!("dataset contains lanthanides/actinides; they are not drawn without --extended true");
    }
    debug!(
        "Layout: extended={}, palette={}, width={}px",
        extended,
        cfg.palette.name(),
        cfg.width
    );

    let table = layout::build(extended);
    let opts = HeatmapOptions {
        width: cfg.width,
        fill_alpha: cfg.fill_alpha,
        palette: cfg.palette,
        blank_color,
        cbar_height: cli.cbar_height,
    };

    render(&cli.output, &table, &dataset, &opts)
        .map_err(|e| anyhow!("failed to render {}: {}", cli.output.display(), e))?;
    info!("Wrote heat map: {}", cli.output.display());

    if cli.save_defaults {
        info!("{}", cfg.save());
    }

    Ok(())
}
