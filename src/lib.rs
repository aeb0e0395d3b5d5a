#![doc = "Automap public API"]
mod common;
mod config;
mod error;
mod graph;
mod map;
mod metrics;
mod partition;
mod plan;

#[doc(inline)]
pub use config::{FairnessPreset, GenerationConfig, MAX_POPULATION_DEVIATION};

#[doc(inline)]
pub use error::ConfigurationError;

#[doc(inline)]
pub use map::{County, Precinct, PrecinctMap, UNKNOWN_COUNTY};

#[doc(inline)]
pub use metrics::{compute_metrics, efficiency_gap, is_tossup, DistrictMetrics, MetricsReport, SeatSummary, TOSSUP_MARGIN};

#[doc(inline)]
pub use plan::{generate, generate_plan, DistrictSummary, Generation, Plan, PlanDocument, Summary};
