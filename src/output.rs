//! Output formatting for host samples

use std::io::Write;

use crate::error::Result;

/// Render one host as a quoted, comma-terminated literal
pub fn format_line(host: &str) -> String {
    format!("\"{}\",", host)
}

/// Write each host on its own line
pub fn write_hosts<W: Write>(out: &mut W, hosts: &[String]) -> Result<()> {
    for host in hosts {
        writeln!(out, "{}", format_line(host))?;
    }
    out.flush()?;
    Ok(())
}
