//! Aktivitetsanalyse for 1 Hz trenings-records: beste innsats, MMP-kurve og
//! effektfordeling, pluss graf-serie, rundegrenser og formattering for visning.
//!
//! Analysefunksjonene er rene: de leser `&[ActivityRecord]`, feiler aldri og
//! returnerer alltid en (ev. tom) liste.

pub mod analyze;
pub mod best_efforts;
pub mod cli;
pub mod config;
pub mod distribution;
pub mod error;
pub mod formatters;
pub mod metrics;
pub mod mmp;
pub mod series;
pub mod types;
pub mod window;

#[cfg(feature = "python")]
mod py;

pub use analyze::{
    analyze_activity, analyze_activity_json, best_efforts_json, mmp_curve_json,
    power_distribution_json, ActivityAnalysis, AnalyzeRequest,
};
pub use best_efforts::{compute_best_efforts, BEST_EFFORT_INTERVALS};
pub use config::{load_config, save_config, AnalysisConfig};
pub use distribution::{compute_power_distribution, DEFAULT_BIN_SIZE};
pub use error::{AnalyticsError, Result};
pub use formatters::{format_duration, format_interval, mmp_landmark, MmpLandmark};
pub use metrics::{has_power_data, RoundTo};
pub use mmp::{compute_mmp_curve, DEFAULT_MMP_DURATIONS};
pub use series::{build_chart_series, parse_timestamp, resolve_lap_bounds};
pub use types::{
    ActivityLap, ActivityRecord, BestEffort, ChartPoint, LapBounds, MmpPoint,
    PowerDistributionBin,
};
