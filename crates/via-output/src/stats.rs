//! JSON statistics export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use via_sim::TrafficStats;

use crate::OutputResult;

/// Write `stats` as pretty-printed JSON to `path`, replacing any existing
/// file.
pub fn write_stats_json(stats: &TrafficStats, path: &Path) -> OutputResult<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, stats)?;
    file.write_all(b"\n")?;
    Ok(())
}
