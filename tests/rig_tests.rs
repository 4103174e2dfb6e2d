use anatomy_viewer::config::RigConfig;
use anatomy_viewer::rig::{CameraRig, CameraState, DragRebase};

#[cfg(test)]
mod orbit_tests {
    use super::*;

    #[test]
    fn test_drag_moves_azimuth_by_normalized_width() {
        let mut rig = CameraRig::new(RigConfig::default());

        rig.apply_orbit(100.0, 0.0, 1000.0, 600.0, 1);

        assert!(
            (rig.target().azimuth - 0.97).abs() < 1e-6,
            "100px on a 1000px view adds 0.1 turns to 0.87, got {}",
            rig.target().azimuth
        );
    }

    #[test]
    fn test_elevation_always_within_limits() {
        let config = RigConfig::default();
        for ty in [-100000.0, -500.0, -30.0, 0.0, 30.0, 500.0, 100000.0] {
            let mut rig = CameraRig::new(config);
            rig.apply_orbit(0.0, ty, 800.0, 600.0, 1);
            let elevation = rig.target().elevation;
            assert!(
                elevation >= config.elevation_min && elevation <= config.elevation_max,
                "elevation {} escaped limits for drag {}",
                elevation,
                ty
            );
        }
    }

    #[test]
    fn test_azimuth_is_unbounded() {
        let mut rig = CameraRig::new(RigConfig::default());
        let rebase = rig.apply_orbit(5000.0, 0.0, 1000.0, 600.0, 1);
        assert!((rig.target().azimuth - 5.87).abs() < 1e-4, "full turns are allowed");
        assert!(!rebase.reset_x, "azimuth never clamps, so never rebases");
    }

    #[test]
    fn test_clamp_rebases_so_reverse_is_immediate() {
        let mut rig = CameraRig::new(RigConfig::default());

        // Drag far past the upper elevation bound
        let rebase = rig.apply_orbit(0.0, 600.0, 800.0, 600.0, 1);
        assert_eq!(rig.target().elevation, 0.40);
        assert!(rebase.reset_y, "clamp must ask the recognizer to zero y");
        assert!(!rebase.reset_x);

        // The recognizer zeroed its y translation; a small reverse drag
        // must move off the bound with no dead zone
        let rebase = rig.apply_orbit(0.0, -30.0, 800.0, 600.0, 1);
        assert!(
            (rig.target().elevation - 0.35).abs() < 1e-6,
            "reverse drag reacts immediately, got {}",
            rig.target().elevation
        );
        assert_eq!(rebase, DragRebase::NONE);
    }

    #[test]
    fn test_finger_count_change_commits_angles() {
        let mut rig = CameraRig::new(RigConfig::default());

        rig.apply_orbit(100.0, 0.0, 1000.0, 600.0, 1);
        assert!((rig.target().azimuth - 0.97).abs() < 1e-6);

        // Second finger lands: angles commit, translation resets
        let rebase = rig.apply_orbit(100.0, 0.0, 1000.0, 600.0, 2);
        assert_eq!(rebase, DragRebase::BOTH);
        assert!((rig.target().azimuth - 0.97).abs() < 1e-6, "commit keeps the pose");

        // A fresh one-finger drag continues from the committed angle
        rig.apply_orbit(100.0, 0.0, 1000.0, 600.0, 1);
        assert!((rig.target().azimuth - 1.07).abs() < 1e-6);
    }
}

#[cfg(test)]
mod pinch_tests {
    use super::*;

    #[test]
    fn test_zoom_decrements_by_velocity_over_divisor() {
        let mut rig = CameraRig::new(RigConfig::default());
        rig.apply_pinch(10.0, 2);
        assert!((rig.target().zoom - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_clamps_at_both_ends() {
        let config = RigConfig::default();

        let mut rig = CameraRig::new(config);
        for _ in 0..100 {
            rig.apply_pinch(50.0, 2);
        }
        assert_eq!(rig.target().zoom, config.zoom_min);

        let mut rig = CameraRig::new(config);
        for _ in 0..100 {
            rig.apply_pinch(-50.0, 2);
        }
        assert_eq!(rig.target().zoom, config.zoom_max);
    }

    #[test]
    fn test_nan_velocity_leaves_zoom_unchanged() {
        let mut rig = CameraRig::new(RigConfig::default());
        rig.apply_pinch(f32::NAN, 2);
        assert_eq!(rig.target().zoom, 10.0, "NaN is treated as zero velocity");
    }

    #[test]
    fn test_zoom_stays_finite_for_all_inputs() {
        let config = RigConfig::default();
        for velocity in [
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::MAX,
            f32::MIN,
            -0.0,
            1e-30,
        ] {
            let mut rig = CameraRig::new(config);
            rig.apply_pinch(velocity, 2);
            let zoom = rig.target().zoom;
            assert!(zoom.is_finite(), "zoom went non-finite for velocity {}", velocity);
            assert!(
                zoom >= config.zoom_min && zoom <= config.zoom_max,
                "zoom {} escaped limits for velocity {}",
                zoom,
                velocity
            );
        }
    }

    #[test]
    fn test_single_touch_pinch_is_ignored() {
        let mut rig = CameraRig::new(RigConfig::default());
        rig.apply_pinch(10.0, 1);
        assert_eq!(rig.target().zoom, 10.0);
    }
}

#[cfg(test)]
mod pan_tests {
    use super::*;

    #[test]
    fn test_pan_scales_by_divisor() {
        let mut rig = CameraRig::new(RigConfig::default());
        // Dragging left moves the view right
        rig.apply_pan(-30.0, 30.0, 2);
        assert!((rig.target().offset_x - 1.0).abs() < 1e-6);
        assert!((rig.target().offset_y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_clamps_and_rebases_each_axis_independently() {
        let config = RigConfig::default();
        let mut rig = CameraRig::new(config);

        // x hits its bound, y stays inside
        let rebase = rig.apply_pan(-300.0, 30.0, 2);
        assert_eq!(rig.target().offset_x, config.offset_x_max);
        assert!((rig.target().offset_y - 1.0).abs() < 1e-6);
        assert!(rebase.reset_x);
        assert!(!rebase.reset_y);

        // After the recognizer zeroes x, a reverse drag moves immediately
        let rebase = rig.apply_pan(30.0, 30.0, 2);
        assert!((rig.target().offset_x - 3.0).abs() < 1e-6);
        assert!(!rebase.reset_x);
    }

    #[test]
    fn test_offsets_always_within_bounds() {
        let config = RigConfig::default();
        for (tx, ty) in [(1e6, 1e6), (-1e6, -1e6), (0.0, 1e6), (1e6, 0.0)] {
            let mut rig = CameraRig::new(config);
            rig.apply_pan(tx, ty, 2);
            let state = rig.target();
            assert!(state.offset_x >= config.offset_x_min && state.offset_x <= config.offset_x_max);
            assert!(state.offset_y >= config.offset_y_min && state.offset_y <= config.offset_y_max);
        }
    }

    #[test]
    fn test_finger_lift_commits_offsets() {
        let mut rig = CameraRig::new(RigConfig::default());
        rig.apply_pan(-30.0, 0.0, 2);
        let rebase = rig.apply_pan(0.0, 0.0, 0);
        assert_eq!(rebase, DragRebase::BOTH);
        assert!((rig.target().offset_x - 1.0).abs() < 1e-6);

        // Next two-finger drag continues from the committed offset
        rig.apply_pan(-30.0, 0.0, 2);
        assert!((rig.target().offset_x - 2.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_reset_restores_construction_state() {
        let config = RigConfig::default();
        let mut rig = CameraRig::new(config);
        rig.apply_orbit(200.0, 100.0, 800.0, 600.0, 1);
        rig.apply_pan(-60.0, 45.0, 2);
        rig.apply_pinch(20.0, 2);

        rig.reset();

        assert_eq!(*rig.target(), CameraState::from_config(&config));
    }

    #[test]
    fn test_snap_to_centers_zooms_and_straightens() {
        let mut rig = CameraRig::new(RigConfig::default());
        rig.snap_to(2.0, 1.0);

        let target = rig.target();
        assert_eq!(target.offset_x, 2.0);
        assert_eq!(target.offset_y, 1.0);
        assert_eq!(target.zoom, 3.0);
        assert_eq!(target.azimuth, 0.0);
        assert_eq!(target.elevation, 0.0);
    }

    #[test]
    fn test_snap_to_clamps_world_point_to_pan_bounds() {
        let config = RigConfig::default();
        let mut rig = CameraRig::new(config);
        rig.snap_to(100.0, -100.0);
        assert_eq!(rig.target().offset_x, config.offset_x_max);
        assert_eq!(rig.target().offset_y, config.offset_y_min);
    }

    #[test]
    fn test_pinch_after_snap_returns_into_zoom_range() {
        let config = RigConfig::default();
        let mut rig = CameraRig::new(config);
        rig.snap_to(0.0, 0.0);
        assert_eq!(rig.target().zoom, config.focus_zoom);

        rig.apply_pinch(-1.0, 2);
        assert_eq!(
            rig.target().zoom,
            config.zoom_min,
            "first pinch after focus re-clamps into the pinch range"
        );
    }

    #[test]
    fn test_tick_moves_a_fixed_fraction() {
        let mut rig = CameraRig::new(RigConfig::default());
        rig.apply_pinch(-10.0, 2); // target zoom 11
        rig.tick();
        assert!(
            (rig.rendered().zoom - 10.075).abs() < 1e-5,
            "one tick covers 7.5% of the remaining distance, got {}",
            rig.rendered().zoom
        );
    }

    #[test]
    fn test_reset_then_ticks_converge_monotonically() {
        let config = RigConfig::default();
        let initial = CameraState::from_config(&config);
        let mut rig = CameraRig::new(config);

        // Disturb the pose and let the rendered state chase it for a while
        rig.apply_orbit(300.0, 200.0, 800.0, 600.0, 1);
        rig.apply_pan(-90.0, 60.0, 2);
        rig.apply_pinch(30.0, 2);
        for _ in 0..20 {
            rig.tick();
        }

        rig.reset();

        let mut last_distance = rig.rendered().distance(&initial);
        for _ in 0..500 {
            rig.tick();
            let distance = rig.rendered().distance(&initial);
            assert!(
                distance <= last_distance + 1e-6,
                "distance to the reset pose must not grow: {} -> {}",
                last_distance,
                distance
            );
            last_distance = distance;
        }
        assert!(
            last_distance < 1e-3,
            "rendered state should converge to the construction pose, still {} away",
            last_distance
        );
    }
}
