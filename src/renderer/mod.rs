//! Canvas2D presentation (wasm only)
//!
//! Reads `GameState` and draws it; nothing here feeds back into the sim.
//! Brick rects come from the same pure layout function collision uses, so
//! what the player sees is exactly what the ball hits.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::state::{GamePhase, GameState, Paddle};
use crate::sim::grid::brick_rect;

/// Neon palette, cycled by level
const BRICK_COLORS: [&str; 6] = [
    "#00ffff", "#00ff99", "#ff00cc", "#ffcc00", "#ff0066", "#33ff33",
];

/// Canvas2D renderer over the game surface
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw one frame of the current state
    pub fn render(&self, state: &GameState) {
        self.ctx
            .clear_rect(0.0, 0.0, SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64);

        self.draw_bricks(state);
        self.draw_ball(state);
        self.draw_paddle(state);

        if state.phase == GamePhase::GameOver {
            self.draw_game_over();
        }
    }

    fn draw_bricks(&self, state: &GameState) {
        let color = BRICK_COLORS[state.level as usize % BRICK_COLORS.len()];

        for col in 0..state.grid.columns() {
            for row in 0..state.grid.rows() {
                if !state.grid.get(col, row).is_active() {
                    continue;
                }
                let rect = brick_rect(col, row);

                let gradient = self.ctx.create_linear_gradient(
                    rect.x as f64,
                    rect.y as f64,
                    (rect.x + rect.w) as f64,
                    (rect.y + rect.h) as f64,
                );
                let _ = gradient.add_color_stop(0.0, color);
                let _ = gradient.add_color_stop(1.0, "#000");

                self.ctx.begin_path();
                self.ctx
                    .rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx.set_shadow_color(color);
                self.ctx.set_shadow_blur(10.0);
                self.ctx.fill();
                self.ctx.close_path();
            }
        }

        self.ctx.set_shadow_blur(0.0);
    }

    fn draw_ball(&self, state: &GameState) {
        let (x, y) = (state.ball.pos.x as f64, state.ball.pos.y as f64);
        let r = state.ball.radius as f64;

        self.ctx.begin_path();
        if let Ok(glow) = self.ctx.create_radial_gradient(x, y, 1.0, x, y, r * 2.0) {
            let _ = glow.add_color_stop(0.0, "#fff");
            let _ = glow.add_color_stop(1.0, "#00ffff");
            self.ctx.set_fill_style_canvas_gradient(&glow);
        }
        let _ = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_paddle(&self, state: &GameState) {
        let x = state.paddle.x as f64;

        self.ctx.begin_path();
        let gradient =
            self.ctx
                .create_linear_gradient(x, 0.0, x + PADDLE_WIDTH as f64, 0.0);
        let _ = gradient.add_color_stop(0.0, "#00ffff");
        let _ = gradient.add_color_stop(1.0, "#0077ff");
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.rect(
            x,
            Paddle::top_y() as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_game_over(&self) {
        self.ctx.set_font("28px Orbitron, sans-serif");
        self.ctx.set_fill_style_str("#ff0033");
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(
            "GAME OVER",
            SURFACE_WIDTH as f64 / 2.0,
            SURFACE_HEIGHT as f64 / 2.0,
        );
    }
}
