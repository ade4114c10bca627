//! Fluent builder for constructing a [`Simulation`].

use shoal_agent::Shoal;
use shoal_arena::{Arena, Obstacle};
use shoal_behavior::NoiseProfile;
use shoal_core::{SimConfig, Tick, TrialRng};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required input
///
/// - [`SimConfig`] — population composition, seed, step cap
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                        |
/// |-------------|--------------------------------|
/// | `.arena(a)` | [`Arena::standard`]            |
/// | `.noise(n)` | [`NoiseProfile::calibrated`]   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(SimConfig::shoal_of(8, 42)).build()?;
/// let outcome = sim.run_to_decision(&mut NoopObserver)?;
/// ```
pub struct SimulationBuilder {
    config: SimConfig,
    arena:  Option<Arena>,
    noise:  Option<NoiseProfile>,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, arena: None, noise: None }
    }

    /// Override the arena geometry.  Tests use this to shrink the tank.
    pub fn arena(mut self, arena: Arena) -> Self {
        self.arena = Some(arena);
        self
    }

    /// Override the noise profile.  Tests use [`NoiseProfile::silent`] to
    /// make draws exact.
    pub fn noise(mut self, noise: NoiseProfile) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Validate the configuration, spawn the population, and return a
    /// ready-to-run [`Simulation`] at tick zero.
    pub fn build(self) -> SimResult<Simulation> {
        if self.config.population() == 0 {
            return Err(SimError::Config("population is empty".into()));
        }
        if self.config.max_steps == 0 {
            return Err(SimError::Config("max_steps must be positive".into()));
        }
        if let Some(force) = self.config.refugia_force
            && !force.is_finite()
        {
            return Err(SimError::Config(format!("refugia_force {force} is not finite")));
        }

        let arena = self.arena.unwrap_or_else(Arena::standard);
        let noise = self.noise.unwrap_or_default();

        let mut trial_rng = TrialRng::new(self.config.seed);
        let (shoal, rngs) = Shoal::build(&self.config, &arena, &mut trial_rng);

        Ok(Simulation {
            config: self.config,
            arena,
            obstacle: Obstacle,
            noise,
            clock: Tick::ZERO,
            shoal,
            rngs,
        })
    }
}
