use crate::entry::PendingEntry;
use crate::plot_view::{build_plot_state, PlotState};
use crate::settings::LimitDefaults;
use crate::spc::{resolve_limits, ResolvedLimits};
use history::{HistoryStore, StoreError};
use records::MeasurementGroup;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Plot states for both groups from one display event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    pub bottom: PlotState,
    pub top: PlotState,
}

impl ChartPair {
    pub fn get(&self, group: MeasurementGroup) -> &PlotState {
        match group {
            MeasurementGroup::Bottom => &self.bottom,
            MeasurementGroup::Top => &self.top,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlotState> {
        [&self.bottom, &self.top].into_iter()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// History for `group`; a store that cannot be read counts as no history.
pub fn load_history(store: &dyn HistoryStore, group: MeasurementGroup) -> Vec<f64> {
    match store.fetch_history(group) {
        Ok(series) => series,
        Err(err) => {
            log::warn!("could not fetch {group} history, treating it as empty: {err}");
            Vec::new()
        }
    }
}

pub fn current_limits(
    store: &dyn HistoryStore,
    defaults: &LimitDefaults,
    group: MeasurementGroup,
) -> ResolvedLimits {
    let series = load_history(store, group);
    resolve_limits(group, &series, defaults.for_group(group))
}

fn group_state(
    store: &dyn HistoryStore,
    defaults: &LimitDefaults,
    group: MeasurementGroup,
    pending: Option<&PendingEntry>,
) -> PlotState {
    let limits = current_limits(store, defaults, group);
    build_plot_state(group, pending.map(|p| p.batch(group)), limits)
}

/// Rebuilds both charts from fresh history. Used at startup and after a save
/// with no pending entry, and on display with the entry under review.
pub fn refresh_charts(
    store: &dyn HistoryStore,
    defaults: &LimitDefaults,
    pending: Option<&PendingEntry>,
) -> ChartPair {
    ChartPair {
        bottom: group_state(store, defaults, MeasurementGroup::Bottom, pending),
        top: group_state(store, defaults, MeasurementGroup::Top, pending),
    }
}

/// Persists every reading of `pending` and returns how many were written.
pub fn save_entry(
    store: &mut dyn HistoryStore,
    pending: PendingEntry,
    recorded_at: u64,
) -> Result<usize, ChartError> {
    let records = pending.records(recorded_at);
    let saved = store.append(&records)?;
    log::info!(
        "saved {saved} readings for sample {} ({})",
        pending.sample_id,
        pending.technician_initials
    );
    Ok(saved)
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
