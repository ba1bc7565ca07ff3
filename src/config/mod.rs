pub mod plan;

pub use plan::PatchPlan;
