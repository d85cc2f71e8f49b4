//! Delimited-text readers for the two input sources
//!
//! Both sources are comma-delimited with a header row that is
//! skipped. The period source seeds the ID key set; log rows whose ID
//! has no configured period are discarded, so the two mappings handed
//! to the builder always share one key set.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::tree::LogTree;
use crate::{PeriodMap, TimestampMap};

/// Read the period source: `message_id,period` rows, header skipped
pub fn read_periods<P: AsRef<Path>>(path: P) -> Result<PeriodMap> {
    let path = path.as_ref();
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open period file {}", path.display()))?,
    );

    let mut periods = PeriodMap::new();
    for (line_no, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (id_field, period_field) = split_row(&line, line_no)?;
        let message_id: u32 = id_field.trim().parse().with_context(|| {
            format!("invalid message id '{}' on line {}", id_field, line_no + 1)
        })?;
        let period: u32 = period_field.trim().parse().with_context(|| {
            format!("invalid period '{}' on line {}", period_field, line_no + 1)
        })?;

        periods.insert(message_id, period);
    }

    debug!(path = %path.display(), streams = periods.len(), "read period source");
    Ok(periods)
}

/// Read the timestamp source: `timestamp,message_id` rows, header skipped
///
/// Each timestamp is appended in file order to its stream's sequence.
/// Rows whose ID is absent from `periods` are silently discarded;
/// every configured ID gets a sequence, possibly empty.
pub fn read_log<P: AsRef<Path>>(path: P, periods: &PeriodMap) -> Result<TimestampMap> {
    let path = path.as_ref();
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open log file {}", path.display()))?,
    );

    let mut timestamps: TimestampMap = periods.keys().map(|&id| (id, Vec::new())).collect();
    let mut discarded = 0usize;
    let mut kept = 0usize;

    for (line_no, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (timestamp_field, id_field) = split_row(&line, line_no)?;
        let timestamp: f64 = timestamp_field.trim().parse().with_context(|| {
            format!("invalid timestamp '{}' on line {}", timestamp_field, line_no + 1)
        })?;
        let message_id: u32 = id_field.trim().parse().with_context(|| {
            format!("invalid message id '{}' on line {}", id_field, line_no + 1)
        })?;

        match timestamps.get_mut(&message_id) {
            Some(observed) => {
                observed.push(timestamp);
                kept += 1;
            }
            None => discarded += 1,
        }
    }

    debug!(
        path = %path.display(),
        kept,
        discarded,
        "read timestamp source"
    );
    Ok(timestamps)
}

/// Read both sources and build the index
pub fn import_files<P: AsRef<Path>>(periods_path: P, log_path: P) -> Result<LogTree> {
    let periods = read_periods(periods_path)?;
    let timestamps = read_log(log_path, &periods)?;
    let tree = LogTree::build(Some(periods), Some(timestamps))?;
    Ok(tree)
}

fn split_row(line: &str, line_no: usize) -> Result<(&str, &str)> {
    line.split_once(',')
        .ok_or_else(|| anyhow!("expected two comma-separated fields on line {}", line_no + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_requires_delimiter() {
        assert!(split_row("10,100", 1).is_ok());
        assert!(split_row("10 100", 1).is_err());
    }
}
