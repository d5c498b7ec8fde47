use crate::style::{dash_pattern, reference_color, series_color, ChartStyle, Palette};
use crate::RenderError;
use hardness_core::charts::ChartPair;
use hardness_core::plot_view::{PlotState, SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL};
use plotters::coord::Shift;
use plotters::prelude::*;
use records::POSITIONS_PER_GROUP;

// Half a position of margin either side of positions 1..=6.
const X_MIN: f64 = 0.5;
const X_MAX: f64 = POSITIONS_PER_GROUP as f64 + 0.5;
const MARKER_RADIUS: u32 = 4;

fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Splits `[start, end]` into `(from, to)` dash segments.
pub(crate) fn dash_segments(start: f64, end: f64, dash: f64, gap: f64) -> Vec<(f64, f64)> {
    if dash <= 0.0 || end <= start {
        return vec![(start, end)];
    }
    let mut segments = Vec::new();
    let mut x = start;
    while x < end {
        segments.push((x, (x + dash).min(end)));
        x += dash + gap.max(0.0);
    }
    segments
}

/// Draws Bottom in the upper half and Top in the lower half of `root`.
pub(crate) fn draw_pair<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    charts: &ChartPair,
    style: &ChartStyle,
) -> Result<(), RenderError> {
    let palette = Palette::for_theme(style.dark_theme);
    root.fill(&palette.background).map_err(draw_err)?;
    let panels = root.split_evenly((2, 1));
    for (area, state) in panels.iter().zip(charts.iter()) {
        draw_panel(area, state, style, &palette)?;
    }
    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    state: &PlotState,
    style: &ChartStyle,
    palette: &Palette,
) -> Result<(), RenderError> {
    let label_size = if style.show_text { 56 } else { 0 };
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, label_size)
        .set_label_area_size(LabelAreaPosition::Bottom, label_size);
    if style.show_text {
        builder.caption(
            state.title(),
            ("sans-serif", 22).into_font().color(&palette.text),
        );
    }
    let mut chart = builder
        .build_cartesian_2d(X_MIN..X_MAX, state.y_range.min..state.y_range.max)
        .map_err(draw_err)?;

    if style.show_text {
        chart
            .configure_mesh()
            .x_labels(POSITIONS_PER_GROUP)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .axis_desc_style(("sans-serif", 14).into_font().color(&palette.text))
            .label_style(("sans-serif", 12).into_font().color(&palette.text))
            .axis_style(&palette.axis)
            .light_line_style(&palette.grid)
            .bold_line_style(&palette.axis)
            .draw()
            .map_err(draw_err)?;
    }

    if !state.series.is_empty() {
        let color = series_color(state.group);
        let points = state.points();
        let series_plot = chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(draw_err)?;
        if style.show_text {
            series_plot.label(SERIES_LABEL).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
        chart
            .draw_series(
                points
                    .into_iter()
                    .map(|point| Circle::new(point, MARKER_RADIUS, color.filled())),
            )
            .map_err(draw_err)?;
    }

    for line in state.reference_lines() {
        let color = reference_color(line.kind);
        let (dash, gap) = dash_pattern(line.kind);
        let value = line.value;
        let line_plot = chart
            .draw_series(
                dash_segments(X_MIN, X_MAX, dash, gap)
                    .into_iter()
                    .map(move |(from, to)| {
                        PathElement::new(vec![(from, value), (to, value)], color.stroke_width(2))
                    }),
            )
            .map_err(draw_err)?;
        if style.show_text {
            line_plot.label(line.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
    }

    if style.show_text {
        chart
            .configure_series_labels()
            .background_style(palette.legend_background)
            .border_style(palette.axis)
            .label_font(("sans-serif", 12).into_font().color(&palette.text))
            .position(SeriesLabelPosition::UpperRight)
            .margin(8)
            .draw()
            .map_err(draw_err)?;
    }
    Ok(())
}
