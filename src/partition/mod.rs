mod algorithm;
mod partition;
mod score;
mod stats;

pub(crate) use algorithm::MAX_OPTIMIZE_PASSES;
pub(crate) use partition::Partition;
pub(crate) use score::Targets;
pub(crate) use stats::DistrictStats;
