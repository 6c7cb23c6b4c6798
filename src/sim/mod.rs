//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, velocities in pixels/frame
//! - Stable iteration order (column-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{ball_in_brick, paddle_deflect};
pub use grid::{Brick, BrickGrid, BrickRect, BrickStatus, brick_rect};
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
