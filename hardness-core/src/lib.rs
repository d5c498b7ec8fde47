//! SPC limits and chart state for manual hardness data entry.

pub mod batch;
pub mod charts;
pub mod entry;
pub mod plot_view;
pub mod settings;
pub mod spc;
pub mod validation;

pub use batch::{BatchError, ReadingBatch};
pub use charts::{refresh_charts, save_entry, ChartError, ChartPair};
pub use entry::{EntryError, EntryForm, PendingEntry};
pub use plot_view::{build_plot_state, PlotState, ReferenceKind, ReferenceLine, YAxisRange};
pub use settings::{ChartSettings, EntryLimits, LimitDefaults, Settings, SettingsError};
pub use spc::{compute_limits, resolve_limits, ControlLimits, LimitSource, ResolvedLimits};
