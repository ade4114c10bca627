//! Integration tests for shoal-sim.

use shoal_agent::MAX_SPEED;
use shoal_arena::{Arena, Obstacle, Side};
use shoal_core::{SimConfig, Tick};

use crate::{NoopObserver, ShoalObserver, SimError, SimulationBuilder, run_batch};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn small_config(fish_count: usize, seed: u64) -> SimConfig {
    SimConfig::shoal_of(fish_count, seed)
}

// ── SimulationBuilder validation ──────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimulationBuilder::new(small_config(5, 42)).build().unwrap();
        assert_eq!(sim.shoal.len(), 5);
        assert_eq!(sim.shoal.free_count, 5);
        assert_eq!(sim.clock, Tick::ZERO);
    }

    #[test]
    fn empty_population_errors() {
        let result = SimulationBuilder::new(small_config(0, 42)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_step_cap_errors() {
        let mut config = small_config(3, 42);
        config.max_steps = 0;
        assert!(SimulationBuilder::new(config).build().is_err());
    }

    #[test]
    fn non_finite_refugia_force_errors() {
        let mut config = small_config(3, 42);
        config.refugia_force = Some(f32::NAN);
        assert!(SimulationBuilder::new(config).build().is_err());
    }

    #[test]
    fn population_is_free_then_top_then_bottom_replicas() {
        let mut config = small_config(4, 42);
        config.replicas_top = 2;
        config.replicas_bottom = 1;
        let sim = SimulationBuilder::new(config).build().unwrap();

        assert_eq!(sim.shoal.len(), 7);
        assert_eq!(sim.shoal.free_count, 4);
        assert!(sim.shoal.fish[..4].iter().all(|f| f.is_free()));
        assert!(sim.shoal.fish[4..].iter().all(|f| f.is_replica()));
        assert_eq!(sim.shoal.replica_census(&sim.arena), (2, 1));
    }

    #[test]
    fn all_fish_spawn_inside_the_spawn_box() {
        let sim = SimulationBuilder::new(small_config(20, 7)).build().unwrap();
        let arena = &sim.arena;
        for fish in sim.shoal.free_fish() {
            assert!(fish.position.x >= arena.spawn_left);
            assert!(fish.position.x <= arena.spawn_left + arena.spawn_size);
            assert!(fish.position.y >= arena.spawn_top);
            assert!(fish.position.y <= arena.spawn_top + arena.spawn_size);
        }
    }
}

// ── Single trial ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod trial_tests {
    use super::*;

    #[test]
    fn two_fish_trial_converges_and_tallies_everyone() {
        let mut sim = SimulationBuilder::new(small_config(2, 1234)).build().unwrap();
        let outcome = sim.run_to_decision(&mut NoopObserver).unwrap();
        assert_eq!(outcome.top + outcome.bottom, 2);
        assert!(outcome.decided_at.0 > 0);
        assert!(outcome.decided_at.0 <= sim.config.max_steps);
    }

    #[test]
    fn same_seed_reproduces_the_trial_exactly() {
        let run = |seed| {
            let mut sim = SimulationBuilder::new(small_config(3, seed)).build().unwrap();
            sim.run_to_decision(&mut NoopObserver).unwrap()
        };
        let a = run(99);
        let b = run(99);
        assert_eq!(a.decided_at, b.decided_at);
        assert_eq!(a.top, b.top);
        assert_eq!(a.bottom, b.bottom);
    }

    #[test]
    fn one_tick_cap_reports_non_convergence() {
        // The spawn box sits far right of the decision line; one tick can
        // never carry a fish across.
        let mut config = small_config(2, 5);
        config.max_steps = 1;
        let mut sim = SimulationBuilder::new(config).build().unwrap();
        let result = sim.run_to_decision(&mut NoopObserver);
        assert!(matches!(result, Err(SimError::NonConvergence { steps: 1 })));
    }

    #[test]
    fn proportion_top_is_a_fraction_of_deciders() {
        let mut sim = SimulationBuilder::new(small_config(4, 2024)).build().unwrap();
        let outcome = sim.run_to_decision(&mut NoopObserver).unwrap();
        let p = outcome.proportion_top();
        assert!((0.0..=1.0).contains(&p));
        assert!((p - outcome.top as f64 / 4.0).abs() < 1e-12);
    }
}

// ── Trajectory invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;
    use shoal_agent::Shoal;

    /// Checks, every tick, that Free fish stay in bounds and out of the
    /// obstacle, never exceed the speed cap, and never flip a decision.
    struct InvariantChecker {
        arena:     Arena,
        decisions: Vec<Option<Side>>,
    }

    impl ShoalObserver for InvariantChecker {
        fn on_tick_end(&mut self, tick: Tick, shoal: &Shoal) {
            for (i, fish) in shoal.free_fish().iter().enumerate() {
                assert!(
                    self.arena.contains(fish.position),
                    "{tick}: fish {i} out of bounds at {}",
                    fish.position
                );
                assert!(
                    !Obstacle.contains(fish.position),
                    "{tick}: fish {i} inside the obstacle at {}",
                    fish.position
                );
                assert!(fish.speed() <= MAX_SPEED + 1e-3, "{tick}: fish {i} over speed cap");

                if let Some(prior) = self.decisions[i] {
                    assert_eq!(fish.decision, Some(prior), "{tick}: fish {i} flipped sides");
                }
                self.decisions[i] = fish.decision;
            }
        }
    }

    #[test]
    fn free_fish_respect_bounds_speed_and_commitment() {
        let mut sim = SimulationBuilder::new(small_config(3, 77)).build().unwrap();
        let mut checker = InvariantChecker {
            arena:     sim.arena.clone(),
            decisions: vec![None; 3],
        };
        sim.run_to_decision(&mut checker).unwrap();
    }

    #[test]
    fn terminal_fish_stay_pinned() {
        let mut sim = SimulationBuilder::new(small_config(2, 311)).build().unwrap();
        sim.run_to_decision(&mut NoopObserver).unwrap();

        let pinned: Vec<_> = sim
            .shoal
            .free_fish()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.reached_terminal)
            .map(|(i, f)| (i, f.position))
            .collect();
        for _ in 0..10 {
            sim.step();
        }
        for (i, pin) in pinned {
            assert_eq!(sim.shoal.fish[i].position, pin);
        }
    }

    #[test]
    fn replicas_are_never_tallied() {
        let mut config = small_config(2, 17);
        config.replicas_top = 3;
        let mut sim = SimulationBuilder::new(config).build().unwrap();
        let outcome = sim.run_to_decision(&mut NoopObserver).unwrap();
        assert_eq!(outcome.top + outcome.bottom, 2);
    }
}

// ── Batch runs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn every_trial_is_accounted_for() {
        let report = run_batch(&small_config(2, 42), 4).unwrap();
        assert_eq!(report.outcomes.len() + report.non_convergent.len(), 4);
    }

    #[test]
    fn batches_reproduce_from_the_base_seed() {
        let a = run_batch(&small_config(2, 42), 3).unwrap();
        let b = run_batch(&small_config(2, 42), 3).unwrap();
        assert_eq!(a.proportions(), b.proportions());
        assert_eq!(a.non_convergent, b.non_convergent);
    }

    #[test]
    fn trials_get_distinct_seeds() {
        let report = run_batch(&small_config(2, 42), 3).unwrap();
        let mut seeds: Vec<u64> = report.outcomes.iter().map(|o| o.seed).collect();
        seeds.extend(&report.non_convergent);
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 3);
    }

    #[test]
    fn proportions_lie_in_the_unit_interval() {
        let report = run_batch(&small_config(3, 8), 3).unwrap();
        for p in report.proportions() {
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn batch_config_errors_are_fatal() {
        assert!(run_batch(&small_config(0, 42), 2).is_err());
    }
}
