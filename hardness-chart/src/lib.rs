//! Draws a pair of hardness plot states with `plotters`.

mod rendering;
pub mod style;

pub use style::ChartStyle;

use hardness_core::charts::ChartPair;
use plotters::prelude::*;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

pub fn render_svg(charts: &ChartPair, path: &Path, style: &ChartStyle) -> Result<(), RenderError> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    rendering::draw_pair(root, charts, style)?;
    log::info!("wrote SVG chart to {}", path.display());
    Ok(())
}

pub fn render_png(charts: &ChartPair, path: &Path, style: &ChartStyle) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    rendering::draw_pair(root, charts, style)?;
    log::info!("wrote PNG chart to {}", path.display());
    Ok(())
}

/// Picks SVG or PNG from the file extension, defaulting to SVG.
pub fn render_to_file(
    charts: &ChartPair,
    path: &Path,
    style: &ChartStyle,
) -> Result<(), RenderError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => render_png(charts, path, style),
        _ => render_svg(charts, path, style),
    }
}

pub fn render_svg_string(charts: &ChartPair, style: &ChartStyle) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        rendering::draw_pair(root, charts, style)?;
    }
    Ok(svg)
}
