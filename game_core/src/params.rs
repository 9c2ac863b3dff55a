/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // units per second
    pub const PADDLE_OFFSET_WALL: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED_X: f32 = 100.0;
    pub const SERVE_SPEED_Y: f32 = 60.0;

    /// Applied to both velocity components on every top/bottom bounce.
    /// There is no cap, so rally speed grows without bound.
    pub const VELOCITY_MULTIPLIER: f32 = 1.1;

    /// Fixed offset pushing the ball back inside after a wall bounce.
    /// Not a reflection: an overshoot larger than this leaves the ball
    /// out of bounds for another frame.
    pub const WALL_REBOUND_NUDGE: f32 = 10.0;
}
