use mccd3d::math::{Point, Real, Vector};
use mccd3d::partitioning::MAX_BINS_PER_AXIS;
use mccd3d::pipeline::{CollisionSettings, CollisionSystem, ConfigError};

#[test]
fn invalid_settings_are_rejected_at_construction() {
    let settings = CollisionSettings {
        num_bins: Vector::new(0, 10, 10),
        ..CollisionSettings::default()
    };
    assert!(matches!(
        CollisionSystem::with_settings(settings),
        Err(ConfigError::ZeroBinCount(_))
    ));

    let settings = CollisionSettings {
        envelope: Real::NAN,
        ..CollisionSettings::default()
    };
    assert!(matches!(
        CollisionSystem::with_settings(settings),
        Err(ConfigError::InvalidEnvelope(_))
    ));

    let settings = CollisionSettings {
        num_threads: 0,
        ..CollisionSettings::default()
    };
    assert!(matches!(
        CollisionSystem::with_settings(settings),
        Err(ConfigError::ZeroThreads)
    ));
}

#[test]
fn rejected_setters_keep_the_previous_value() {
    let mut system = CollisionSystem::new().unwrap();

    assert!(system.set_envelope(0.1).is_ok());
    assert!(matches!(
        system.set_envelope(-0.1),
        Err(ConfigError::InvalidEnvelope(_))
    ));
    assert_eq!(system.settings().envelope, 0.1);

    assert!(system
        .set_broadphase_num_bins(Vector::new(4, 4, 4), false)
        .is_ok());
    assert!(system
        .set_broadphase_num_bins(Vector::new(4, 0, 4), true)
        .is_err());
    assert_eq!(system.settings().num_bins, Vector::new(4, 4, 4));
    assert!(!system.settings().fixed_bins);

    assert!(matches!(
        system.set_broadphase_grid_density(0.0),
        Err(ConfigError::InvalidGridDensity(_))
    ));
    assert!(matches!(
        system.enable_active_bounding_box(Point::new(0.0, Real::NAN, 0.0), Point::origin()),
        Err(ConfigError::InvalidActiveBox)
    ));

    assert!(system.set_num_threads(3).is_ok());
    assert_eq!(system.num_threads(), 3);
    assert!(system.set_num_threads(0).is_err());
    assert_eq!(system.num_threads(), 3);
}

#[test]
fn oversized_bin_counts_are_rejected() {
    let mut system = CollisionSystem::new().unwrap();
    assert!(matches!(
        system.set_broadphase_num_bins(Vector::new(5000, 1, 1), true),
        Err(ConfigError::TooManyBins([5000, 1, 1]))
    ));
    assert_eq!(system.settings().num_bins, Vector::repeat(10));

    let max = Vector::new(MAX_BINS_PER_AXIS, 1, 1);
    assert!(system.set_broadphase_num_bins(max, true).is_ok());
    assert_eq!(system.num_bins(), max);
}
