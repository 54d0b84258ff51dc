//! CSV position time-series export.
//!
//! One row per snapshot: a `time` column followed by one column per vehicle
//! id (sorted).  A vehicle absent from a snapshot leaves its cell empty, so
//! vehicles appearing mid-run still line up.

use std::collections::BTreeSet;
use std::path::Path;

use csv::Writer;

use via_core::VehicleId;
use via_sim::Snapshot;

use crate::OutputResult;

/// Write the snapshot history as a CSV file at `path`.
///
/// An empty history still produces a file with the `time` header row.
pub fn write_positions_csv(history: &[Snapshot], path: &Path) -> OutputResult<()> {
    let ids: BTreeSet<&VehicleId> = history
        .iter()
        .flat_map(|s| s.positions.keys())
        .collect();

    let mut writer = Writer::from_path(path)?;

    let mut header = vec!["time".to_owned()];
    header.extend(ids.iter().map(|id| id.to_string()));
    writer.write_record(&header)?;

    for snapshot in history {
        let mut row = Vec::with_capacity(ids.len() + 1);
        row.push(snapshot.time.to_string());
        for id in &ids {
            row.push(match snapshot.positions.get(id.as_str()) {
                Some(position) => position.to_string(),
                None => String::new(),
            });
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
