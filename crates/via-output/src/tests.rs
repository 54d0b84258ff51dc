//! Integration tests for via-output.

use std::collections::BTreeMap;

use via_core::VehicleId;
use via_sim::{SimObserver, Snapshot, TrafficStats};

use crate::{StatsExportObserver, write_positions_csv, write_stats_json};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snapshot(time: f64, entries: &[(&str, f64)]) -> Snapshot {
    let positions: BTreeMap<VehicleId, f64> = entries
        .iter()
        .map(|(id, pos)| (VehicleId::new(*id), *pos))
        .collect();
    Snapshot { time, positions }
}

fn sample_stats() -> TrafficStats {
    TrafficStats {
        vehicle_count: 2,
        speeds:        vec![10.0, 20.0],
        mean_speed:    15.0,
    }
}

// ── Positions CSV ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod positions_csv {
    use super::*;

    #[test]
    fn one_row_per_snapshot_one_column_per_vehicle() {
        let history = vec![
            snapshot(1.0, &[("V1", 10.0), ("V2", 5.0)]),
            snapshot(2.0, &[("V1", 20.0), ("V2", 10.0)]),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.csv");
        write_positions_csv(&history, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["time,V1,V2", "1,10,5", "2,20,10"]);
    }

    #[test]
    fn absent_vehicle_leaves_an_empty_cell() {
        // V2 only enters the network at the second snapshot
        let history = vec![
            snapshot(1.0, &[("V1", 10.0)]),
            snapshot(2.0, &[("V1", 20.0), ("V2", 0.0)]),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.csv");
        write_positions_csv(&history, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["time,V1,V2", "1,10,", "2,20,0"]);
    }

    #[test]
    fn empty_history_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.csv");
        write_positions_csv(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), ["time"]);
    }
}

// ── Stats JSON ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_json {
    use super::*;

    #[test]
    fn stats_roundtrip_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write_stats_json(&sample_stats(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["vehicle_count"], 2);
        assert_eq!(value["mean_speed"], 15.0);
        assert_eq!(value["speeds"][1], 20.0);
    }

    #[test]
    fn unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        // the directory itself is not a writable file path
        assert!(write_stats_json(&sample_stats(), dir.path()).is_err());
    }
}

// ── Export observer ───────────────────────────────────────────────────────────

#[cfg(test)]
mod export_observer {
    use super::*;

    #[test]
    fn exports_on_run_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let mut observer = StatsExportObserver::new(&path);

        observer.on_run_end(&sample_stats());
        assert!(observer.take_error().is_none());

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["vehicle_count"], 2);
    }

    #[test]
    fn write_failure_is_stored_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        // point the export at the directory itself to force a failure
        let mut observer = StatsExportObserver::new(dir.path());
        observer.on_run_end(&sample_stats());
        assert!(observer.take_error().is_some());
        assert!(observer.take_error().is_none()); // taken once
    }
}
