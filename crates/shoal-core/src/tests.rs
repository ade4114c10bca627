//! Unit tests for shoal-core primitives.

#[cfg(test)]
mod ids {
    use crate::FishId;

    #[test]
    fn index_roundtrip() {
        let id = FishId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FishId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(FishId::INVALID.0, u32::MAX);
        assert_eq!(FishId::default(), FishId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(FishId(7).to_string(), "FishId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::Vec2;
    use crate::vec2::wrap_angle;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn magnitude_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
        assert!((Vec2::ZERO.distance(v) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_guards_zero() {
        assert!(Vec2::ZERO.normalize().is_none());
        let unit = Vec2::new(0.0, -2.0).normalize().unwrap();
        assert!((unit.magnitude() - 1.0).abs() < 1e-6);
        assert!((unit.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_returns_new_vector() {
        let v = Vec2::new(1.0, 0.0);
        let r = v.rotate(FRAC_PI_2);
        // original unchanged — value semantics
        assert_eq!(v, Vec2::new(1.0, 0.0));
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn angle_between_is_signed_and_wrapped() {
        let east = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        assert!((east.angle_between(north) - FRAC_PI_2).abs() < 1e-6);
        assert!((north.angle_between(east) + FRAC_PI_2).abs() < 1e-6);
        // directly behind wraps onto +π, never −π
        let west = Vec2::new(-1.0, 0.0);
        assert!((east.angle_between(west) - PI).abs() < 1e-5);
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
        for k in -8..=8 {
            let a = wrap_angle(0.7 + k as f32 * 2.0 * PI);
            assert!((a - 0.7).abs() < 1e-4, "k={k} gave {a}");
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn shoal_of_defaults() {
        let cfg = SimConfig::shoal_of(4, 7);
        assert_eq!(cfg.fish_count, 4);
        assert_eq!(cfg.population(), 4);
        assert_eq!(cfg.max_steps, SimConfig::DEFAULT_MAX_STEPS);
        assert!(cfg.refugia_force.is_none());
    }

    #[test]
    fn population_includes_replicas() {
        let mut cfg = SimConfig::shoal_of(4, 7);
        cfg.replicas_top = 2;
        cfg.replicas_bottom = 1;
        assert_eq!(cfg.population(), 7);
    }
}

#[cfg(test)]
mod rng {
    use crate::{FishId, FishRng, TrialRng, trunc_normal};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = FishRng::new(12345, FishId(0));
        let mut r2 = FishRng::new(12345, FishId(0));
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_fish_differ() {
        let mut r0 = FishRng::new(1, FishId(0));
        let mut r1 = FishRng::new(1, FishId(1));
        let a: f32 = r0.gen_range(0.0..1.0);
        let b: f32 = r1.gen_range(0.0..1.0);
        assert_ne!(a, b, "seeds for adjacent fish should diverge");
    }

    #[test]
    fn trunc_normal_respects_bounds() {
        let mut rng = TrialRng::new(99);
        for _ in 0..1000 {
            let x = trunc_normal(rng.inner(), 0.1, 0.05, 0.05, 0.15);
            assert!((0.05..=0.15).contains(&x), "out of bounds: {x}");
        }
    }

    #[test]
    fn trunc_normal_zero_sd_returns_mean() {
        let mut rng = TrialRng::new(0);
        assert_eq!(trunc_normal(rng.inner(), 1.54, 0.0, -10.0, 20.0), 1.54);
        // mean outside the interval clamps
        assert_eq!(trunc_normal(rng.inner(), 5.0, 0.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn trial_seeds_distinct() {
        let s0 = TrialRng::trial_seed(42, 0);
        let s1 = TrialRng::trial_seed(42, 1);
        assert_ne!(s0, s1);
        assert_eq!(s0, 42); // trial 0 keeps the base seed
    }
}
