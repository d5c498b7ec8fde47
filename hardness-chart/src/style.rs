use hardness_core::plot_view::ReferenceKind;
use hardness_core::settings::ChartSettings;
use plotters::style::RGBColor;
use records::MeasurementGroup;

/// Output size and look of a rendered chart pair.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub dark_theme: bool,
    /// Captions, axis labels and legends. Without text no fonts are needed.
    pub show_text: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle::from(&ChartSettings::default())
    }
}

impl From<&ChartSettings> for ChartStyle {
    fn from(settings: &ChartSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            dark_theme: settings.dark_theme,
            show_text: settings.labels,
        }
    }
}

pub(crate) struct Palette {
    pub background: RGBColor,
    pub text: RGBColor,
    pub axis: RGBColor,
    pub grid: RGBColor,
    pub legend_background: RGBColor,
}

impl Palette {
    pub fn for_theme(dark_theme: bool) -> Self {
        if dark_theme {
            Self {
                background: RGBColor(24, 24, 24),
                text: RGBColor(220, 220, 220),
                axis: RGBColor(80, 80, 80),
                grid: RGBColor(48, 48, 48),
                legend_background: RGBColor(18, 18, 18),
            }
        } else {
            Self {
                background: RGBColor(255, 255, 255),
                text: RGBColor(40, 40, 40),
                axis: RGBColor(120, 120, 120),
                grid: RGBColor(220, 220, 220),
                legend_background: RGBColor(240, 240, 240),
            }
        }
    }
}

pub(crate) fn series_color(group: MeasurementGroup) -> RGBColor {
    match group {
        // skyblue
        MeasurementGroup::Bottom => RGBColor(135, 206, 235),
        // lightcoral
        MeasurementGroup::Top => RGBColor(240, 128, 128),
    }
}

pub(crate) fn reference_color(kind: ReferenceKind) -> RGBColor {
    match kind {
        ReferenceKind::Mean => RGBColor(0, 0, 255),
        ReferenceKind::Ucl | ReferenceKind::Lcl => RGBColor(255, 0, 0),
    }
}

/// `(dash, gap)` lengths in position units: dotted mean, dashed limits.
pub(crate) fn dash_pattern(kind: ReferenceKind) -> (f64, f64) {
    match kind {
        ReferenceKind::Mean => (0.03, 0.07),
        ReferenceKind::Ucl | ReferenceKind::Lcl => (0.2, 0.1),
    }
}
