//! Request execution: client construction, single calls and bounded fan-outs.
mod client;
mod driver;
mod request;

#[cfg(test)]
mod tests;

pub use client::build_client;
pub use driver::{LoadDriver, issue};
pub use request::{EXPECTED_STATUS, RequestOutcome, RequestResult, RequestSpec};
