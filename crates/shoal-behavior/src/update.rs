//! One-tick fish update: perceive, turn, accelerate, move, resolve, decide.

use shoal_agent::{AgentKind, Fish};
use shoal_arena::{Arena, Obstacle, resolve_obstacle, resolve_walls};
use shoal_core::FishRng;

use crate::acceleration::{
    acceleration_for_neighbor, apply_acceleration, baseline_acceleration, wall_acceleration,
};
use crate::noise::NoiseProfile;
use crate::perception::select_neighbors;
use crate::turning::{SECOND_NEIGHBOR_WEIGHT, total_turning};

/// Nominal replica cruising speed, jittered ±0.5 each tick.
pub const REPLICA_CRUISE_SPEED: f32 = 10.0;

/// Advance `me` (a snapshot of `population[idx]`) by one tick.
///
/// Replicas cruise straight at their scripted target and ignore walls,
/// obstacle, and the decision machine.  Terminal fish do not move.  The
/// caller writes `me` back into the population after the call, so fish
/// earlier in iteration order are seen at their new state by later ones.
pub fn advance(
    me: &mut Fish,
    idx: usize,
    population: &[Fish],
    arena: &Arena,
    obstacle: &Obstacle,
    noise: &NoiseProfile,
    rng: &mut FishRng,
) {
    if me.reached_terminal {
        return;
    }

    if let AgentKind::ScriptedReplica { target } = me.kind {
        let speed = rng.trunc_normal(
            REPLICA_CRUISE_SPEED,
            noise.replica_sd,
            REPLICA_CRUISE_SPEED - 0.5,
            REPLICA_CRUISE_SPEED + 0.5,
        );
        if let Some(heading) = (target - me.position).normalize() {
            me.velocity = heading * speed;
        }
        me.position += me.velocity;
        return;
    }

    let (nearest, second) = select_neighbors(idx, population);
    let nearest = nearest.map(|j| &population[j]);
    let second = second.map(|j| &population[j]);

    let turn = total_turning(me, nearest, second, arena, noise, rng);
    me.velocity = me.velocity.rotate(turn);

    let mut accel = baseline_acceleration(me.speed(), noise, rng);
    accel += acceleration_for_neighbor(me, nearest, noise, rng);
    accel += SECOND_NEIGHBOR_WEIGHT * acceleration_for_neighbor(me, second, noise, rng);
    accel += wall_acceleration(me, arena, obstacle, noise, rng);
    apply_acceleration(me, accel);
    me.clamp_speed();

    me.position += me.velocity;
    resolve_walls(&mut me.position, &mut me.velocity, arena, rng);
    resolve_obstacle(&mut me.position, &mut me.velocity, obstacle, rng);

    if me.decision.is_none() && me.position.x < me.decision_x {
        me.decision = Some(arena.side_of(me.position));
    }
    if me.decision.is_some() && me.position.x < me.shaded_area_x {
        me.freeze(arena.corner_pin(arena.side_of(me.position)));
    }
}
