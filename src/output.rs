//! Single-line JSON output.

use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Write `value` as one compact JSON line and flush.
pub fn emit<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
