/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 12;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_MARGIN: i32 = 24; // Gap between screen edge and paddle
    pub const PLAYER_SPEED: i32 = 9; // pixels per tick
    pub const AI_SPEED: i32 = 8; // pixels per tick
    pub const AI_FOLLOW_FACTOR: f32 = 0.95; // < 1.0 keeps the AI beatable

    // Ball
    pub const BALL_SIZE: i32 = 14;
    pub const BALL_SPEED_INITIAL: f32 = 6.0;
    pub const BALL_SERVE_SLOPE: f32 = 0.5; // speed_y = speed * slope on serve
    pub const BALL_MAX_ANGLE_SPEED: f32 = 7.5;
    pub const BALL_SPEED_INCREASE: f32 = 0.5; // Added to |speed_x| on paddle hit
    pub const BALL_SPEED_MAX: f32 = 12.0;

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Timing
    pub const TICK_RATE: u32 = 60;
    pub const FROZEN_TICK_RATE: u32 = 30;
}
