//! The `Fish` agent and its kind tag.

use shoal_arena::{Arena, Side};
use shoal_core::{TrialRng, Vec2};

/// Hard cap on swim speed, length units per tick.
pub const MAX_SPEED: f32 = 17.0;

/// What drives an agent each tick.
///
/// A tagged variant instead of a boolean flag: the update path dispatches by
/// pattern match, so scripted behavior can never leak into the Free branch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// Runs the full behavioral model.
    Free,
    /// Swims a straight line toward `target` at near-constant speed.
    /// Unbounded, never terminal, never tallied; still perceivable as a
    /// neighbor by Free fish.
    ScriptedReplica { target: Vec2 },
}

/// One agent.
///
/// Small and `Copy` on purpose: the tick loop copies a fish out, computes its
/// update against the whole population, and writes it back.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fish {
    pub position: Vec2,
    pub velocity: Vec2,
    pub kind: AgentKind,

    /// Set at most once, at the first decision-line crossing.
    pub decision: Option<Side>,
    /// Once true the fish is frozen: zero velocity, pinned position,
    /// no further updates.
    pub reached_terminal: bool,

    /// Thresholds copied from the arena at construction.
    pub decision_x: f32,
    pub shaded_area_x: f32,

    /// Optional bias strength toward the refuge point of the current half.
    pub refugia_force: Option<f32>,
}

impl Fish {
    /// Spawn a Free fish at a uniform position inside the arena's spawn box
    /// with each velocity component uniform in [−5, 5].
    pub fn spawn_free(arena: &Arena, refugia_force: Option<f32>, rng: &mut TrialRng) -> Self {
        let position = arena.spawn_position(rng);
        let velocity = Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        Self {
            position,
            velocity,
            kind: AgentKind::Free,
            decision: None,
            reached_terminal: false,
            decision_x: arena.decision_x,
            shaded_area_x: arena.shaded_area_x,
            refugia_force,
        }
    }

    /// Spawn a scripted replica entering on `side`, already heading for its
    /// exit target.
    pub fn replica(arena: &Arena, side: Side) -> Self {
        let position = arena.replica_start(side);
        let target = arena.replica_target(side);
        // Initial heading straight at the target; speed settles to cruise on
        // the first update.  Start and target never coincide, so the
        // normalize cannot fail; ZERO is the inert fallback either way.
        let velocity = (target - position).normalize().unwrap_or(Vec2::ZERO);
        Self {
            position,
            velocity,
            kind: AgentKind::ScriptedReplica { target },
            decision: None,
            reached_terminal: false,
            decision_x: arena.decision_x,
            shaded_area_x: arena.shaded_area_x,
            refugia_force: None,
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.kind, AgentKind::Free)
    }

    #[inline]
    pub fn is_replica(&self) -> bool {
        matches!(self.kind, AgentKind::ScriptedReplica { .. })
    }

    /// Current swim speed.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    /// Clamp speed to [`MAX_SPEED`], preserving heading.
    pub fn clamp_speed(&mut self) {
        let speed = self.speed();
        if speed > MAX_SPEED {
            self.velocity = self.velocity.scale(MAX_SPEED / speed);
        }
    }

    /// Freeze the fish at `pin` — terminal state, no further updates.
    pub fn freeze(&mut self, pin: Vec2) {
        self.reached_terminal = true;
        self.velocity = Vec2::ZERO;
        self.position = pin;
    }
}
