//! Free-dot physics
//!
//! One step runs two strictly ordered phases over the pool:
//! 1. `integrate` - gravity, translation, wall/floor/ceiling response,
//!    roll-off deactivation
//! 2. `resolve_collisions` - pairwise dot/dot impulses on the integrated positions
//!
//! Neither phase touches `last_x`/`last_y`; those belong to the trail pass,
//! which runs after both phases.

#[path = "physics/types.rs"]
mod types;
#[path = "physics/integrate.rs"]
mod integrate;
#[path = "physics/collision.rs"]
mod collision;

pub use collision::{resolve_collisions, resolve_pair, CollisionWorkspace};
pub use integrate::integrate;
pub use types::{CollisionStats, IntegrateStats, PairOutcome};
