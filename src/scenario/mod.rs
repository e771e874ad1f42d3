//! Fixed scenarios over the catalog and the plan that sequences them.
mod plan;
mod runner;


pub use plan::{ScenarioPlan, ScenarioStep};
pub use runner::{RunOutcome, ScenarioRunner, word_requests};
