use hardness_core::charts::ChartPair;
use hardness_core::{LimitSource, PlotState, ResolvedLimits};
use records::MeasurementGroup;

pub fn print_info(message: &str) {
    println!("[Hardness][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[Hardness][ERROR]: {message}");
}

fn source_label(source: LimitSource) -> &'static str {
    match source {
        LimitSource::History => "from history",
        LimitSource::Default => "defaults",
    }
}

pub fn print_limits(group: MeasurementGroup, resolved: &ResolvedLimits) {
    let limits = &resolved.limits;
    println!(
        "{group}: mean={:.2} UCL={:.2} LCL={:.2} ({})",
        limits.mean,
        limits.ucl,
        limits.lcl,
        source_label(resolved.source)
    );
}

pub fn print_plot_state(state: &PlotState) {
    println!("{}", state.title());
    if state.series.is_empty() {
        println!("\t(no readings)");
    } else {
        for (position, value) in state.points() {
            println!("\t{position:.0}: {value}");
        }
    }
    for line in state.reference_lines() {
        println!("\t{}", line.label);
    }
    println!(
        "\ty-axis: {:.2} .. {:.2}",
        state.y_range.min, state.y_range.max
    );
}

pub fn print_chart_pair(charts: &ChartPair) {
    for state in charts.iter() {
        print_plot_state(state);
    }
}

pub fn print_history(group: MeasurementGroup, series: &[f64]) {
    if series.is_empty() {
        print_info(&format!("No {group} readings stored"));
    } else {
        print_info(&format!("{} {group} readings:", series.len()));
        for value in series {
            println!("{value}");
        }
    }
}
