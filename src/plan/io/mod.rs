mod json;

pub use json::PlanDocument;
