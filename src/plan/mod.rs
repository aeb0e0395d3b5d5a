mod generate;
mod io;
mod plan;
mod summary;

pub use generate::{generate, generate_plan, Generation};
pub use io::PlanDocument;
pub use plan::Plan;
pub use summary::{DistrictSummary, Summary};
