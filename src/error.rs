/// Inputs that leave the per-district population target undefined.
///
/// Malformed per-feature data never produces one of these; the engine falls back
/// to defaults for those instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested number of districts was zero.
    #[error("number of districts must be at least 1 (got {0})")]
    InvalidDistrictCount(u32),

    /// Every precinct reported zero population.
    #[error("total population is 0 across {0} precincts; cannot compute a per-district target")]
    ZeroPopulation(usize),
}
