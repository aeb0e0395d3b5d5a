mod electoral;
mod report;

pub use electoral::{efficiency_gap, is_tossup, SeatSummary, TOSSUP_MARGIN};
pub use report::{compute_metrics, DistrictMetrics, MetricsReport};
