//! List command implementation

use anyhow::Result;
use std::io::{self, Write};
use textrev_core::Method;

/// Print every reversal method with its description
pub fn execute_methods() -> Result<()> {
    write_methods(io::stdout().lock())
}

fn write_methods<W: Write>(mut writer: W) -> Result<()> {
    writeln!(writer, "Available reversal methods:")?;
    for method in Method::ALL {
        writeln!(writer, "  {:<14} {}", method.name(), method.description())?;
    }
    writer.flush()?;
    Ok(())
}
