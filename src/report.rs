//! Delimited-text report sink
//!
//! A generic mapping-to-rows serializer: one `key,value` row per
//! entry, no header. Works for any of the tree-wide reports
//! (accuracy, frequency) or any other `(Display, Display)` mapping.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Write one `key,value` row per entry
pub fn write_report<W, K, V, I>(writer: &mut W, entries: I) -> Result<()>
where
    W: Write,
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    for (key, value) in entries {
        writeln!(writer, "{},{}", key, value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a report to a file path
pub fn write_report_file<P, K, V, I>(path: P, entries: I) -> Result<()>
where
    P: AsRef<Path>,
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, entries)
        .with_context(|| format!("failed to write report to {}", path.display()))
}

/// Render a report into a `String` (useful for tests and snapshots)
pub fn render_report<K, V, I>(entries: I) -> Result<String>
where
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let mut buffer = Vec::new();
    write_report(&mut buffer, entries)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered report is not valid UTF-8"))
}
