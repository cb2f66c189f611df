//! Demo Hosts - synthetic hostname samples
//!
//! Generates placeholder hostnames such as `mail.bartell.com` for screenshots
//! and demo data, printed as quoted literals ready to paste into source code.

pub mod error;
pub mod logging;
pub mod output;
pub mod sample;
pub mod types;

// Re-export commonly used types
pub use error::{HostGenError, Result};
pub use types::{demo_hosts, Coin, DemoHost, SampleConfig};

// Re-export main functionality
pub use sample::{domain, run, HostGenerator, RandomSource, RngSource, ScriptedSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    logging::init_subscriber();
    Ok(())
}
