use crate::commands::*;
use crate::output::*;
use hardness_chart::{render_to_file, ChartStyle};
use hardness_core::charts::{current_limits, refresh_charts, save_entry, unix_now, ChartPair};
use hardness_core::settings::{load_or_default, Settings};
use hardness_core::EntryForm;
use history::StoreFactory;
use records::{MeasurementGroup, POSITIONS_PER_GROUP};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_or_default(&cli.config)?;
    let mut store = StoreFactory::create(&settings.store);

    if let Commands::Init = cli.command {
        store.ensure_ready()?;
        print_info(&format!(
            "Record store ready at {}",
            settings.store.path.display()
        ));
        return Ok(());
    }
    if let Err(err) = store.ensure_ready() {
        print_error(&err.to_string());
    }

    match cli.command {
        Commands::Init => {}
        Commands::Show { chart, json } => {
            let charts = refresh_charts(&*store, &settings.limits, None);
            emit_charts(&charts, json, chart.as_deref(), &settings)?;
        }
        Commands::Enter {
            technician,
            sample,
            bottom,
            top,
            save,
            chart,
            json,
        } => {
            let form =
                EntryForm::new(technician, sample, form_fields(bottom), form_fields(top));
            let pending = form.validate(&settings.entry)?;

            let displayed = refresh_charts(&*store, &settings.limits, Some(&pending));
            if !save {
                emit_charts(&displayed, json, chart.as_deref(), &settings)?;
                if !json {
                    print_info(
                        "Data displayed on graph. Review it, then rerun with --save to keep it.",
                    );
                }
                return Ok(());
            }

            let saved = save_entry(&mut *store, pending, unix_now())?;
            // Empty batches against the limits that now include this entry.
            let after_save = refresh_charts(&*store, &settings.limits, None);
            if json {
                let report = SaveReport {
                    displayed: &displayed,
                    saved,
                    after_save: &after_save,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_chart_pair(&displayed);
                print_info(&format!("Successfully saved {saved} records"));
                print_chart_pair(&after_save);
            }
            write_chart(&after_save, chart.as_deref(), json, &settings)?;
        }
        Commands::Limits { json } => {
            let resolved: BTreeMap<String, _> = MeasurementGroup::ALL
                .into_iter()
                .map(|group| {
                    (
                        group.name().to_ascii_lowercase(),
                        current_limits(&*store, &settings.limits, group),
                    )
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                for group in MeasurementGroup::ALL {
                    if let Some(limits) = resolved.get(&group.name().to_ascii_lowercase()) {
                        print_limits(group, limits);
                    }
                }
            }
        }
        Commands::History { group } => {
            let series = store.fetch_history(group)?;
            print_history(group, &series);
        }
    }
    Ok(())
}

/// Pads missing readings with empty fields so validation reports them.
fn form_fields(values: Vec<String>) -> [String; POSITIONS_PER_GROUP] {
    let mut fields: [String; POSITIONS_PER_GROUP] = Default::default();
    for (field, value) in fields.iter_mut().zip(values) {
        *field = value;
    }
    fields
}

/// What `enter --save --json` prints: the reviewed entry, the save count,
/// and the charts redrawn from the updated history.
#[derive(Serialize)]
struct SaveReport<'a> {
    displayed: &'a ChartPair,
    saved: usize,
    after_save: &'a ChartPair,
}

fn emit_charts(
    charts: &ChartPair,
    json: bool,
    chart_path: Option<&Path>,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(charts)?);
    } else {
        print_chart_pair(charts);
    }
    write_chart(charts, chart_path, json, settings)
}

/// JSON output stays a single document, so the confirmation is text-only.
fn write_chart(
    charts: &ChartPair,
    chart_path: Option<&Path>,
    json: bool,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = chart_path {
        render_to_file(charts, path, &ChartStyle::from(&settings.chart))?;
        if !json {
            print_info(&format!("Chart written to {}", path.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::form_fields;

    #[test]
    fn short_input_is_padded_with_empty_fields() {
        let fields = form_fields(vec!["301".to_string(), "302".to_string()]);
        assert_eq!(fields[1], "302");
        assert!(fields[2..].iter().all(String::is_empty));
    }
}
