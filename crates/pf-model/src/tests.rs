//! Unit tests for pf-model.

#[cfg(test)]
mod speed {
    use crate::{SpeedModel, SpeedParams};

    fn reference_model() -> SpeedModel {
        SpeedModel::new(SpeedParams::default())
    }

    #[test]
    fn free_flow_below_threshold_is_exact() {
        let m = reference_model();
        for d in [0.0, 0.1, 0.2, 0.31] {
            assert_eq!(m.speed(d), 1.61, "density {d} should be free flow");
        }
    }

    #[test]
    fn cubic_above_threshold() {
        let m = reference_model();
        // d = 1.0 → x = 0.69 → 0.11x³ − 0.53x² + 0.15x + 1.61
        let v = m.speed(1.0);
        assert!((v - 1.497303).abs() < 1e-6, "got {v}");
        // Degradation: higher density, lower speed in the fitted range.
        assert!(m.speed(2.0) < m.speed(1.0));
        assert!(m.speed(3.5) < m.speed(2.0));
    }

    #[test]
    fn strictly_positive_everywhere() {
        let m = reference_model();
        let mut d = 0.0;
        while d < 50.0 {
            assert!(m.speed(d) > 0.0, "speed collapsed at density {d}");
            d += 0.05;
        }
    }

    #[test]
    fn floor_clamps_a_collapsing_fit() {
        // A linear fit that goes negative past x = 0.5; the floor must hold.
        let m = SpeedModel::new(SpeedParams {
            free_flow: 1.0,
            k_init: 0.3,
            coeffs: [0.0, 0.0, -2.0, 1.0],
            min_speed: 0.05,
        });
        assert_eq!(m.speed(5.0), 0.05);
        assert!(m.speed(0.5) > 0.05);
    }

    #[test]
    fn floor_is_tunable() {
        let mut params = SpeedParams::default();
        params.min_speed = 0.5;
        let m = SpeedModel::new(params);
        // Deep congestion: the reference cubic dips to ~0.26 m/s near
        // x = 3, below this run's floor.
        assert_eq!(m.speed(3.31), 0.5);
    }
}

#[cfg(test)]
mod params {
    use crate::{CorridorParams, ModelError};

    #[test]
    fn reference_capacity_is_fifteen() {
        let p = CorridorParams::default();
        assert_eq!(p.screening_capacity(), 15); // floor(2.3 / 0.15)
        p.validate().unwrap();
    }

    #[test]
    fn capacity_floors_not_rounds() {
        let mut p = CorridorParams::default();
        p.object_thickness_m = 0.4;
        assert_eq!(p.screening_capacity(), 5); // floor(5.75)
    }

    #[test]
    fn non_positive_constants_rejected() {
        let mut p = CorridorParams::default();
        p.object_thickness_m = 0.0;
        assert!(matches!(
            p.validate(),
            Err(ModelError::NonPositiveParam { name: "object_thickness_m", .. })
        ));

        let mut p = CorridorParams::default();
        p.speed.min_speed = -0.01;
        assert!(p.validate().is_err());
    }

    #[test]
    fn oversized_object_yields_zero_capacity_error() {
        let mut p = CorridorParams::default();
        p.object_thickness_m = 3.0; // wider than the belt
        assert!(matches!(p.validate(), Err(ModelError::ZeroCapacity { .. })));
    }

    #[test]
    fn segment_area_from_dimensions() {
        let p = CorridorParams::default();
        assert!((p.segment1.area_m2() - 4.55 * 2.24).abs() < 1e-12);
    }
}

#[cfg(test)]
mod admission {
    use crate::{Admission, ScreeningZone, try_admit};

    #[test]
    fn accepts_until_full_then_rejects() {
        let mut zone = ScreeningZone::new(3);
        for _ in 0..3 {
            assert_eq!(try_admit(&mut zone), Admission::Accepted);
        }
        assert_eq!(zone.occupied(), 3);
        assert_eq!(try_admit(&mut zone), Admission::Rejected);
        assert_eq!(zone.occupied(), 3, "rejection must not change occupancy");
    }

    #[test]
    fn release_reopens_a_slot() {
        let mut zone = ScreeningZone::new(1);
        assert!(try_admit(&mut zone).is_accepted());
        assert!(!try_admit(&mut zone).is_accepted());
        zone.release();
        assert!(try_admit(&mut zone).is_accepted());
    }
}

#[cfg(test)]
mod segment {
    use crate::{SegmentGeometry, WalkingSegment};

    #[test]
    fn density_tracks_occupancy() {
        let mut seg = WalkingSegment::new(SegmentGeometry::new(4.0, 2.5)); // 10 m²
        assert_eq!(seg.density(), 0.0);
        for _ in 0..5 {
            seg.enter();
        }
        assert!((seg.density() - 0.5).abs() < 1e-12);
        seg.leave();
        assert!((seg.density() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn no_hard_cap() {
        let mut seg = WalkingSegment::new(SegmentGeometry::new(1.0, 1.0));
        for _ in 0..100 {
            seg.enter(); // never refuses
        }
        assert_eq!(seg.occupied(), 100);
        assert_eq!(seg.density(), 100.0);
    }
}
