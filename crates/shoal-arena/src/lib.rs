//! `shoal-arena` — experimental-tank geometry for the shoalsim model.
//!
//! The tank layout is a fixed constant of the model, digitized from the
//! experimental setup: a 1400×800 arena, a spawn box on the right, a
//! triangular obstacle splitting the swim path into a top and a bottom
//! channel, and two vertical thresholds (decision line, shaded area) that
//! drive the per-fish state machine in `shoal-sim`.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`arena`]    | `Arena` — walls, spawn box, thresholds, refuge points |
//! | [`obstacle`] | `Obstacle` — triangle edges, inside test, proximity   |
//! | [`bounce`]   | wall/obstacle resolvers, edge-proximity vector        |

pub mod arena;
pub mod bounce;
pub mod obstacle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arena::{Arena, Side};
pub use bounce::{edge_proximity_vector, resolve_obstacle, resolve_walls};
pub use obstacle::Obstacle;
