//! Output types produced by the client.
//!
//! - `report` — `BatchReport`, the JSON document written after a successful run.
pub mod report;
