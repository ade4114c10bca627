//! `shoal-agent` — fish agent state and population storage.
//!
//! A fish is a small `Copy` struct; the whole population lives in one
//! `Vec<Fish>` inside [`Shoal`].  Per-fish RNGs are kept in a separate
//! [`FishRngs`] struct so the update loop can hold `&mut` to one fish's RNG
//! while reading the rest of the shoal — the same split-borrow layout the
//! tick loop needs everywhere.
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`fish`]  | `Fish`, `AgentKind`                               |
//! | [`store`] | `Shoal` population store, `FishRngs`              |

pub mod fish;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use fish::{AgentKind, Fish, MAX_SPEED};
pub use store::{FishRngs, Shoal};
