//! `cc-spatial`: exclusion zones and spatial queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`obstacle`]  | `Obstacle`, `ObstacleField` (R-tree of exclusion circles)   |
//! | [`collision`] | `is_point_inside_ellipse`, `check_collision`                |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod collision;
pub mod error;
pub mod obstacle;


pub use collision::{COLLISION_BUFFER, check_collision, colliding_island, is_point_inside_ellipse};
pub use error::{SpatialError, SpatialResult};
pub use obstacle::{Obstacle, ObstacleField};
