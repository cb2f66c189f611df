//! Synthetic hostname sampling
//!
//! Hosts are `<label>.<domain>`, where the label is either a reusable
//! subdomain keyword or a server name drawn once from a shuffled pool.

mod generator;
mod pool;
mod source;
pub mod words;

pub use generator::{domain, run, sort_by_domain, HostGenerator};
pub use pool::ServerPool;
pub use source::{RandomSource, RngSource, ScriptedSource};
