//! Game state and lifecycle operations
//!
//! Everything gameplay-observable lives in `GameState`; there are no ambient
//! globals. The shell owns one instance and all mutation flows through the
//! methods here and the per-frame `tick`.

use glam::Vec2;

use super::grid::BrickGrid;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only an explicit restart leaves this phase
    GameOver,
}

/// The ball - position and velocity in surface pixels, velocity per frame
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position with the launch velocity for `level`:
    /// rightward and upward, both components at the level's base speed
    pub fn at_start(level: u32) -> Self {
        let speed = level_speed(level);
        Self {
            pos: Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT - BALL_START_DROP),
            vel: Vec2::new(speed, -speed),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle - fixed size and vertical position, only x moves
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SURFACE_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Paddle {
    /// Paddle top edge (the ball bounces off this band)
    pub fn top_y() -> f32 {
        SURFACE_HEIGHT - PADDLE_HEIGHT - PADDLE_MARGIN_BOTTOM
    }
}

/// Per-axis launch speed for a level
#[inline]
pub fn level_speed(level: u32) -> f32 {
    BALL_BASE_SPEED + level as f32 * BALL_SPEED_PER_LEVEL
}

/// Brick rows for a level: start at 3, +1 per level, capped at 6
#[inline]
pub fn rows_for_level(level: u32) -> usize {
    (BRICK_ROWS_START + (level as usize - 1)).min(BRICK_ROWS_MAX)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    pub score: u32,
    /// 1-based level counter
    pub level: u32,
    pub lives: u8,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: level 1, full lives, centered ball and paddle, 7x3 grid.
    ///
    /// Also the restart operation - callable at any time (including from
    /// GameOver) and always produces this exact state.
    pub fn new() -> Self {
        let level = 1;
        Self {
            ball: Ball::at_start(level),
            paddle: Paddle::default(),
            grid: BrickGrid::new(rows_for_level(level)),
            score: 0,
            level,
            lives: START_LIVES,
            phase: GamePhase::Playing,
        }
    }

    /// Whether the frame loop should keep stepping
    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Put the ball back at the serve position with current-level velocity
    pub fn reset_ball(&mut self) {
        self.ball = Ball::at_start(self.level);
    }

    /// The ball fell past the paddle
    ///
    /// With lives remaining the ball re-serves; bricks, score, and level all
    /// persist. At zero lives the run ends - high score update and UI are the
    /// shell's job, triggered by observing the phase change.
    pub fn lose_life(&mut self) {
        self.lives -= 1;
        if self.lives > 0 {
            self.reset_ball();
        } else {
            self.phase = GamePhase::GameOver;
            log::info!("game over at level {} with score {}", self.level, self.score);
        }
    }

    /// True iff every brick in the grid is destroyed
    pub fn level_cleared(&self) -> bool {
        self.grid.all_destroyed()
    }

    /// Advance to the next level: faster ball, one more brick row (capped),
    /// fresh grid. Score and lives carry over; the ball stays in flight.
    pub fn next_level(&mut self) {
        self.level += 1;
        self.ball.vel.x += 1.0;
        self.ball.vel.y -= 1.0;
        self.grid = BrickGrid::new(rows_for_level(self.level));
        log::info!("level {} cleared, advancing", self.level - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_fresh() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.grid.rows(), 3);
        assert_eq!(state.grid.active_count(), 21);

        // Level-1 launch velocity: 3.5 px/frame each axis, up and to the right
        assert!((state.ball.vel.x - 3.5).abs() < 1e-6);
        assert!((state.ball.vel.y + 3.5).abs() < 1e-6);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 450.0));
    }

    #[test]
    fn test_restart_after_progression_is_identical() {
        let mut state = GameState::new();
        state.score = 240;
        state.lives = 1;
        state.next_level();
        state.next_level();
        state.phase = GamePhase::GameOver;

        // Restart must not inherit level speed or grown row count
        state = GameState::new();
        assert_eq!(state.level, 1);
        assert_eq!(state.grid.rows(), 3);
        assert!((state.ball.vel.x - 3.5).abs() < 1e-6);
        assert!(state.running());
    }

    #[test]
    fn test_lose_life_with_lives_remaining() {
        let mut state = GameState::new();
        state.score = 50;
        state.grid.get_mut(0, 0).destroy();
        state.ball.pos = Vec2::new(123.0, 499.0);

        state.lose_life();
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        // Ball re-serves, everything else persists
        assert_eq!(state.ball.pos, Vec2::new(300.0, 450.0));
        assert_eq!(state.score, 50);
        assert_eq!(state.grid.active_count(), 20);
    }

    #[test]
    fn test_lose_last_life_ends_run() {
        let mut state = GameState::new();
        state.lives = 1;
        state.lose_life();
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.running());
    }

    #[test]
    fn test_next_level_speed_and_rows() {
        let mut state = GameState::new();
        let before = state.ball.vel;
        state.next_level();
        assert_eq!(state.level, 2);
        assert!((state.ball.vel.x - (before.x + 1.0)).abs() < 1e-6);
        assert!((state.ball.vel.y - (before.y - 1.0)).abs() < 1e-6);
        assert_eq!(state.grid.rows(), 4);
        assert_eq!(state.grid.active_count(), 28);
        // Fresh grid is fully active, so the clear condition resets
        assert!(!state.level_cleared());
    }

    #[test]
    fn test_row_count_caps_at_six() {
        let mut state = GameState::new();
        for _ in 0..10 {
            state.next_level();
        }
        assert_eq!(state.level, 11);
        assert_eq!(state.grid.rows(), 6);
    }
}
