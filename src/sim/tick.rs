//! Per-frame simulation step
//!
//! One tick per display frame; velocities are pixels/frame so there is no
//! dt term. The order of operations inside a tick is load-bearing: brick
//! collisions run against the pre-move position, then walls, then the
//! paddle band, then paddle movement, then integration.

use super::collision::{ball_in_brick, paddle_deflect};
use super::grid::brick_rect;
use super::state::GameState;
use crate::consts::*;

/// Held-key state for a single tick
///
/// Written by the shell's key handlers, read once per tick. Both flags may
/// be set; right wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame
///
/// A no-op once the run has ended; the shell stops scheduling frames when
/// `state.running()` goes false and only an explicit restart resumes.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.running() {
        return;
    }

    brick_collisions(state);

    // Side walls: reflect if the next position would leave the surface
    let next_x = state.ball.pos.x + state.ball.vel.x;
    if next_x > SURFACE_WIDTH - state.ball.radius || next_x < state.ball.radius {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Top wall, then the paddle band near the bottom
    let next_y = state.ball.pos.y + state.ball.vel.y;
    if next_y < state.ball.radius {
        state.ball.vel.y = -state.ball.vel.y;
    } else if next_y > SURFACE_HEIGHT - state.ball.radius - PADDLE_MARGIN_BOTTOM {
        if state.ball.pos.x > state.paddle.x && state.ball.pos.x < state.paddle.x + PADDLE_WIDTH {
            state.ball.vel = paddle_deflect(state.ball.pos.x, state.paddle.x);
        } else if next_y > SURFACE_HEIGHT {
            // Missed the paddle and fell off the bottom
            state.lose_life();
        }
    }

    // Paddle movement: one direction per frame, right has priority.
    // The final step is clamped so the paddle never overshoots the edge.
    if input.right && state.paddle.x < SURFACE_WIDTH - PADDLE_WIDTH {
        state.paddle.x = (state.paddle.x + PADDLE_SPEED).min(SURFACE_WIDTH - PADDLE_WIDTH);
    } else if input.left && state.paddle.x > 0.0 {
        state.paddle.x = (state.paddle.x - PADDLE_SPEED).max(0.0);
    }

    // Integrate
    let vel = state.ball.vel;
    state.ball.pos += vel;
}

/// Scan every brick for a hit with the ball's current center
///
/// Deliberately a naive full nested scan with no early exit: if the ball
/// geometrically overlaps two bricks in one frame, both are destroyed and
/// both score. A level clear triggered mid-scan regenerates the grid and
/// the scan continues over the fresh bricks, which is why the inner bound
/// is re-read every iteration (the new grid may have more rows).
fn brick_collisions(state: &mut GameState) {
    for col in 0..BRICK_COLUMNS {
        let mut row = 0;
        while row < state.grid.rows() {
            if state.grid.get(col, row).is_active()
                && ball_in_brick(state.ball.pos, &brick_rect(col, row))
            {
                state.ball.vel.y = -state.ball.vel.y;
                state.grid.get_mut(col, row).destroy();
                state.score += BRICK_POINTS;
                if state.level_cleared() {
                    state.next_level();
                }
            }
            row += 1;
        }
    }
}
