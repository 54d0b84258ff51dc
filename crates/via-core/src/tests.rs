//! Unit tests for via-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn construction_roundtrip() {
        let id = VehicleId::new("V1");
        assert_eq!(id.as_str(), "V1");
        assert_eq!(VehicleId::from("V1"), id);
        assert_eq!(VehicleId::from(String::from("V1")), id);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(VehicleId::new("V1") < VehicleId::new("V2"));
        assert!(VehicleId::new("bus") > VehicleId::new("V9"));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId::new("V7").to_string(), "V7");
    }

    #[test]
    fn str_lookup_in_maps() {
        use std::collections::BTreeMap;
        let mut m: BTreeMap<VehicleId, f64> = BTreeMap::new();
        m.insert(VehicleId::new("V1"), 12.5);
        assert_eq!(m.get("V1"), Some(&12.5));
    }
}

#[cfg(test)]
mod time {
    use crate::SimClock;

    #[test]
    fn accumulates_dt() {
        let mut clock = SimClock::new();
        assert_eq!(clock.elapsed_secs, 0.0);
        clock.advance(10.0);
        clock.advance(2.5);
        assert_eq!(clock.elapsed_secs, 12.5);
        assert_eq!(clock.ticks, 2);
    }

    #[test]
    fn display_shows_seconds_and_tick() {
        let mut clock = SimClock::new();
        clock.advance(1.0);
        assert_eq!(clock.to_string(), "t=1.00s (tick 1)");
    }
}
