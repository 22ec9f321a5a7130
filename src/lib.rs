//! typefall (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `typefall::{core, input, term, types}` so the binary, integration tests and
//! benchmarks share one import path.

pub use typefall_core as core;
pub use typefall_input as input;
pub use typefall_term as term;
pub use typefall_types as types;
