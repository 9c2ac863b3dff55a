use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_offset_wall: f32,
    pub ball_radius: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub velocity_multiplier: f32,
    pub wall_rebound_nudge: f32,
    /// Scored variant: horizontal exits reset the round and count a point.
    /// When false the ball simply leaves the playfield permanently.
    pub scoring: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_offset_wall: Params::PADDLE_OFFSET_WALL,
            ball_radius: Params::BALL_RADIUS,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            velocity_multiplier: Params::VELOCITY_MULTIPLIER,
            wall_rebound_nudge: Params::WALL_REBOUND_NUDGE,
            scoring: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unscored variant: no left/right handling at all.
    pub fn rally() -> Self {
        Self {
            scoring: false,
            ..Self::default()
        }
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        let inset = self.paddle_offset_wall + self.paddle_width / 2.0;
        if player_id == 0 {
            inset // Left paddle
        } else {
            self.arena_width - inset // Right paddle
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.arena_height - half_height)
    }

    /// Serve vector for a round start; the horizontal sign points away
    /// from the serving side.
    pub fn serve_velocity(&self, side: u8) -> Vec2 {
        let vx = if side == 0 {
            self.serve_speed_x
        } else {
            -self.serve_speed_x
        };
        Vec2::new(vx, self.serve_speed_y)
    }
}
