//! Collision predicates and bounce response
//!
//! Brick hits test the ball *center* against the brick's box as an open
//! interval - grazing an edge exactly is a miss. The paddle imparts a
//! deflection angle based on where along its width the ball lands.

use glam::Vec2;

use super::grid::BrickRect;
use crate::consts::*;

/// True if the ball center lies strictly inside the brick's bounds
#[inline]
pub fn ball_in_brick(ball_pos: Vec2, rect: &BrickRect) -> bool {
    ball_pos.x > rect.x
        && ball_pos.x < rect.x + rect.w
        && ball_pos.y > rect.y
        && ball_pos.y < rect.y + rect.h
}

/// Velocity after a paddle bounce
///
/// The strike offset from the paddle center is normalized to (-1, 1) and
/// mapped linearly to a deflection angle of up to 60 degrees from vertical.
/// Speed is pinned to `PADDLE_BOUNCE_SPEED` regardless of incoming speed -
/// the paddle resets the ball's pace, unlike brick bounces which only negate
/// the existing vertical velocity.
pub fn paddle_deflect(ball_x: f32, paddle_x: f32) -> Vec2 {
    let hit_point = ball_x - (paddle_x + PADDLE_WIDTH / 2.0);
    let normalized = hit_point / (PADDLE_WIDTH / 2.0);
    let angle = normalized * MAX_DEFLECT_ANGLE;
    Vec2::new(
        PADDLE_BOUNCE_SPEED * angle.sin(),
        -PADDLE_BOUNCE_SPEED * angle.cos(),
    )
}
