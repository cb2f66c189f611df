//! Demo Hosts - print a sample of synthetic hostnames
//!
//! Output is one `"<host>",` line per host, sorted by domain.

use demo_hosts::{RngSource, SampleConfig};
use std::io;
use std::process;

fn main() {
    if let Err(e) = demo_hosts::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let source = RngSource::new(rand::thread_rng());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = demo_hosts::run(SampleConfig::default(), source, &mut out) {
        tracing::error!(error = %e, "Host sample failed");
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}
