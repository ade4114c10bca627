//! Standard deviations of the model's stochastic draws.

/// Per-draw standard deviations for every truncated-normal sample in the
/// behavioral model.
///
/// [`NoiseProfile::calibrated`] holds the fitted values and is what every
/// simulation run uses.  [`NoiseProfile::silent`] zeroes all of them, turning
/// each draw into its mean — tests use it to check response functions
/// exactly.
#[derive(Clone, Copy, Debug)]
pub struct NoiseProfile {
    /// Turning-response noise (truncated to ±0.4 around the response).
    pub turning_sd: f32,
    /// Baseline speed-homeostasis noise (truncated to [−10, 20]).
    pub baseline_sd: f32,
    /// Neighbor attraction/repulsion acceleration noise.
    pub neighbor_sd: f32,
    /// Wall-escape acceleration noise (truncated to [1, 3]).
    pub wall_escape_sd: f32,
    /// Wall-brake deceleration noise (truncated to [−1, 0]).
    pub wall_brake_sd: f32,
    /// Free-turn wander noise (truncated to ±10).
    pub wander_sd: f32,
    /// Replica cruise-speed jitter (truncated to ±0.5 around cruise).
    pub replica_sd: f32,
}

impl NoiseProfile {
    /// The fitted noise levels used by every real run.
    pub const fn calibrated() -> Self {
        Self {
            turning_sd:     0.1,
            baseline_sd:    0.3,
            neighbor_sd:    0.25,
            wall_escape_sd: 0.5,
            wall_brake_sd:  0.1,
            wander_sd:      0.4,
            replica_sd:     0.25,
        }
    }

    /// All draws return their means exactly.  Test-only override.
    pub const fn silent() -> Self {
        Self {
            turning_sd:     0.0,
            baseline_sd:    0.0,
            neighbor_sd:    0.0,
            wall_escape_sd: 0.0,
            wall_brake_sd:  0.0,
            wander_sd:      0.0,
            replica_sd:     0.0,
        }
    }
}

impl Default for NoiseProfile {
    fn default() -> Self {
        Self::calibrated()
    }
}
