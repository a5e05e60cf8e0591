//! `cc-nav`: ship movement toward a destination with obstacle avoidance.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`step`]      | `compute_step`: the pure per-step function, `NavStep`        |
//! | [`navigator`] | `Navigator`: params + obstacle field, steps resolved ships   |
//! | [`error`]     | `NavError`, `NavResult<T>`                                    |
//!
//! # Movement model
//!
//! Each call advances a ship by at most `speed` map units:
//!
//! 1. **Arrival**: if the arrival point is closer than `speed + arrival_offset`,
//!    the ship snaps to `arrival_offset` units short of it.
//! 2. **Cruise**: otherwise it moves `speed` units straight toward it.
//! 3. **Avoidance**: while cruising, every exclusion zone whose radius plus
//!    `avoidance_distance` reaches the ship adds a sideways push of up to
//!    `avoidance_force`.  Pushes from overlapping zones add up.
//! 4. **Heading**: the bearing to the arrival point, nose-up convention.
//!
//! A ship with no destination, or already sitting on its arrival point, is
//! returned untouched.

pub mod error;
pub mod navigator;
pub mod step;

#[cfg(test)]
mod tests;

pub use error::{NavError, NavResult};
pub use navigator::Navigator;
pub use step::{NavStep, compute_step};
