//! Neon Breakout - a browser Breakout/Arkanoid variant
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Canvas2D rendering (wasm only)
//! - `highscore`: Single persisted best score (LocalStorage on web)

pub mod highscore;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use highscore::HighScore;

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 600.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    /// Ball defaults - velocities are pixels per frame
    pub const BALL_RADIUS: f32 = 8.0;
    /// Ball spawn height above the bottom edge
    pub const BALL_START_DROP: f32 = 50.0;
    /// Per-axis launch speed is BALL_BASE_SPEED + level * BALL_SPEED_PER_LEVEL
    pub const BALL_BASE_SPEED: f32 = 3.0;
    pub const BALL_SPEED_PER_LEVEL: f32 = 0.5;
    /// Speed magnitude after a paddle bounce (fixed, independent of level)
    pub const PADDLE_BOUNCE_SPEED: f32 = 5.0;
    /// Maximum deflection off the paddle, measured from vertical (60 degrees)
    pub const MAX_DEFLECT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle's bottom edge and the surface bottom
    pub const PADDLE_MARGIN_BOTTOM: f32 = 15.0;
    /// Paddle movement per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Brick grid layout
    pub const BRICK_COLUMNS: usize = 7;
    pub const BRICK_ROWS_START: usize = 3;
    pub const BRICK_ROWS_MAX: usize = 6;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 40.0;
    pub const BRICK_OFFSET_LEFT: f32 = 25.0;
    /// Score awarded per destroyed brick
    pub const BRICK_POINTS: u32 = 10;

    /// Starting lives
    pub const START_LIVES: u8 = 3;
}
