// src/rendering/table.rs

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

// Plotters imports
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::colormap::{Palette, ValueScale};
use crate::io::Dataset;
use crate::model::layout::{TableLayout, GROUP_COUNT};

#[derive(Clone, Debug)]
pub struct HeatmapOptions {
    pub width: u32,
    pub fill_alpha: f64,
    pub palette: Palette,
    pub blank_color: RGBColor,
    pub cbar_height: Option<u32>,
}

const MARGIN: f64 = 18.0;
/// Horizontal room reserved at the right for the color bar and its labels.
const CBAR_AREA: f64 = 96.0;
const CBAR_WIDTH: f64 = 20.0;
/// Fraction of the cell the colored rectangle fills.
const CELL_FILL: f64 = 0.9;

#[derive(Clone, Copy, Debug)]
struct Geometry {
    cell: f64,
    width: u32,
    height: u32,
    rows: u8,
}

fn geometry(layout: &TableLayout, opts: &HeatmapOptions) -> Result<Geometry, String> {
    let rows = layout.rows();
    let cell = (opts.width as f64 - 2.0 * MARGIN - CBAR_AREA) / GROUP_COUNT as f64;
    if cell < 6.0 {
        return Err(format!(
            "width {} leaves no room for an 18-column grid",
            opts.width
        ));
    }
    let height = (2.0 * MARGIN + cell * rows as f64).ceil() as u32;
    Ok(Geometry {
        cell,
        width: opts.width,
        height,
        rows,
    })
}

/// Value lookup for one cell: elements absent from the dataset get the
/// neutral blank color.
fn cell_fill(
    symbol: &str,
    values: &HashMap<String, f64>,
    scale: &ValueScale,
    opts: &HeatmapOptions,
) -> RGBColor {
    match values.get(&symbol.to_ascii_lowercase()) {
        Some(v) => opts.palette.sample(scale.normalize(*v)),
        None => opts.blank_color,
    }
}

// --- File Export Entry Point ---
// Backend is chosen by the output extension: .svg vectors, else PNG.
pub fn render(
    path: &Path,
    layout: &TableLayout,
    dataset: &Dataset,
    opts: &HeatmapOptions,
) -> Result<(), String> {
    let geo = geometry(layout, opts)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    if ext.as_deref() == Some("svg") {
        let root = SVGBackend::new(path, (geo.width, geo.height)).into_drawing_area();
        draw_heatmap(&root, layout, dataset, opts, geo).map_err(|e| e.to_string())?;
    } else {
        let root = BitMapBackend::new(path, (geo.width, geo.height)).into_drawing_area();
        draw_heatmap(&root, layout, dataset, opts, geo).map_err(|e| e.to_string())?;
    }

    Ok(())
}

// --- Helper Function: Draws the Heat Map to ANY Backend (PNG or SVG) ---
fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &TableLayout,
    dataset: &Dataset,
    opts: &HeatmapOptions,
    geo: Geometry,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let values = dataset.value_map();
    let scale = ValueScale::from_values(dataset.values()).ok_or("no values to scale")?;

    // Label sizes track the cell so narrow figures stay legible
    let symbol_style = FontDesc::new(FontFamily::SansSerif, geo.cell * 0.30, FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let number_style = FontDesc::new(FontFamily::SansSerif, geo.cell * 0.17, FontStyle::Normal)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let pad = geo.cell * (1.0 - CELL_FILL) / 2.0;

    for cell in &layout.cells {
        let x0 = MARGIN + (cell.col - 1) as f64 * geo.cell;
        let y0 = MARGIN + cell.row as f64 * geo.cell;

        let fill = cell_fill(cell.element.symbol, &values, &scale, opts);
        root.draw(&Rectangle::new(
            [
                ((x0 + pad) as i32, (y0 + pad) as i32),
                ((x0 + geo.cell - pad) as i32, (y0 + geo.cell - pad) as i32),
            ],
            fill.mix(opts.fill_alpha).filled(),
        ))?;

        // Atomic number above the bold symbol, both left-aligned
        let tx = (x0 + geo.cell * 0.12) as i32;
        root.draw(&Text::new(
            cell.element.number.to_string(),
            (tx, (y0 + geo.cell * 0.24) as i32),
            number_style.clone(),
        ))?;
        root.draw(&Text::new(
            cell.element.symbol,
            (tx, (y0 + geo.cell * 0.60) as i32),
            symbol_style.clone(),
        ))?;
    }

    draw_color_bar(root, &scale, opts, geo)?;

    root.present()?;
    Ok(())
}

/// Vertical gradient strip with ~10 tick labels, maximum at the top.
fn draw_color_bar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scale: &ValueScale,
    opts: &HeatmapOptions,
    geo: Geometry,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let grid_h = geo.cell * geo.rows as f64;
    let bar_h = match opts.cbar_height {
        Some(h) => (h as f64).min(grid_h),
        None => grid_h,
    };
    let x0 = geo.width as f64 - MARGIN - CBAR_AREA + 12.0;
    let y_top = MARGIN + (grid_h - bar_h) / 2.0;

    let steps = bar_h.round().max(2.0) as i32;
    for i in 0..steps {
        let t = 1.0 - i as f64 / (steps - 1) as f64;
        let y = y_top + i as f64;
        root.draw(&Rectangle::new(
            [
                (x0 as i32, y as i32),
                ((x0 + CBAR_WIDTH) as i32, (y + 1.0).ceil() as i32),
            ],
            opts.palette.sample(t).mix(opts.fill_alpha).filled(),
        ))?;
    }

    let label_style = FontDesc::new(
        FontFamily::SansSerif,
        (geo.cell * 0.17).max(10.0),
        FontStyle::Normal,
    )
    .color(&BLACK)
    .pos(Pos::new(HPos::Left, VPos::Center));

    const TICKS: usize = 10;
    for k in 0..TICKS {
        let frac = k as f64 / (TICKS - 1) as f64;
        let value = scale.min + frac * (scale.max - scale.min);
        let y = y_top + bar_h * (1.0 - frac);

        root.draw(&Rectangle::new(
            [
                ((x0 + CBAR_WIDTH) as i32, y as i32),
                ((x0 + CBAR_WIDTH + 4.0) as i32, y as i32 + 1),
            ],
            BLACK.filled(),
        ))?;
        root.draw(&Text::new(
            format_tick(value),
            ((x0 + CBAR_WIDTH + 8.0) as i32, y as i32),
            label_style.clone(),
        ))?;
    }

    Ok(())
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 10000.0 || magnitude < 0.01 {
        format!("{:.1e}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::DataRow;
    use crate::model::layout;

    fn opts() -> HeatmapOptions {
        HeatmapOptions {
            width: 1050,
            fill_alpha: 0.65,
            palette: Palette::Plasma,
            blank_color: RGBColor(196, 196, 196),
            cbar_height: None,
        }
    }

    fn dataset(rows: &[(&str, f64)]) -> Dataset {
        Dataset {
            rows: rows
                .iter()
                .map(|(s, v)| DataRow {
                    symbol: s.to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_unmatched_elements_get_the_blank_color() {
        let data = dataset(&[("Fe", 1.0), ("O", 3.0)]);
        let values = data.value_map();
        let scale = ValueScale::from_values(data.values()).unwrap();

        assert_eq!(
            cell_fill("Au", &values, &scale, &opts()),
            RGBColor(196, 196, 196)
        );
    }

    #[test]
    fn test_min_and_max_hit_the_palette_ends() {
        let data = dataset(&[("Fe", -2.0), ("O", 5.0), ("H", 1.0)]);
        let values = data.value_map();
        let scale = ValueScale::from_values(data.values()).unwrap();
        let o = opts();

        assert_eq!(cell_fill("fe", &values, &scale, &o), Palette::Plasma.sample(0.0));
        assert_eq!(cell_fill("O", &values, &scale, &o), Palette::Plasma.sample(1.0));
    }

    #[test]
    fn test_geometry_scales_with_the_series_rows() {
        let compact = geometry(&layout::build(false), &opts()).unwrap();
        let extended = geometry(&layout::build(true), &opts()).unwrap();
        assert_eq!(compact.width, extended.width);
        assert!(extended.height > compact.height);
        assert_eq!(compact.rows, 7);
        assert_eq!(extended.rows, 10);
    }

    #[test]
    fn test_geometry_rejects_tiny_widths() {
        let mut o = opts();
        o.width = 150;
        assert!(geometry(&layout::build(false), &o).is_err());
    }

    #[test]
    fn test_tick_formatting() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(1312.0), "1312");
        assert_eq!(format_tick(0.001), "1.0e-3");
        assert_eq!(format_tick(250000.0), "2.5e5");
    }
}
