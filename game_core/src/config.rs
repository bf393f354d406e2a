use std::fmt;

use crate::map::{Arena, Rect};
use crate::params::Params;
use crate::Side;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_margin: i32,
    pub player_speed: i32,
    pub ai_speed: i32,
    pub ai_follow_factor: f32,
    pub ball_size: i32,
    pub ball_speed_initial: f32,
    pub ball_serve_slope: f32,
    pub ball_max_angle_speed: f32,
    pub ball_speed_increase: f32,
    pub ball_speed_max: f32,
    pub win_score: u8,
    pub tick_rate: u32,
    pub frozen_tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_follow_factor: Params::AI_FOLLOW_FACTOR,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_serve_slope: Params::BALL_SERVE_SLOPE,
            ball_max_angle_speed: Params::BALL_MAX_ANGLE_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            frozen_tick_rate: Params::FROZEN_TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting rectangle for a paddle, vertically centred
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        Rect::new(
            self.paddle_x(side),
            self.arena_height / 2 - self.paddle_height / 2,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Starting rectangle for the ball, centred in the arena
    pub fn ball_spawn(&self) -> Rect {
        let mut rect = Rect::new(0, 0, self.ball_size, self.ball_size);
        rect.set_center(self.arena().center());
        rect
    }

    pub fn paddle_speed(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.player_speed,
            Side::Right => self.ai_speed,
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if !(self.ai_follow_factor > 0.0 && self.ai_follow_factor <= 1.0) {
            return Err(ConfigError::AiFactorOutOfRange(self.ai_follow_factor));
        }

        let positive_ints = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("ai_speed", self.ai_speed),
            ("ball_size", self.ball_size),
        ];
        for (field, value) in positive_ints {
            if value <= 0 {
                return Err(ConfigError::NotPositive(field));
            }
        }

        let positive_floats = [
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_max_angle_speed", self.ball_max_angle_speed),
            ("ball_speed_max", self.ball_speed_max),
        ];
        for (field, value) in positive_floats {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive(field));
            }
        }
        if !(self.ball_speed_increase >= 0.0) {
            return Err(ConfigError::NotPositive("ball_speed_increase"));
        }
        if self.ball_speed_initial > self.ball_speed_max {
            return Err(ConfigError::ServeFasterThanMax {
                serve: self.ball_speed_initial,
                max: self.ball_speed_max,
            });
        }
        if self.tick_rate == 0 || self.frozen_tick_rate == 0 {
            return Err(ConfigError::NotPositive("tick_rate"));
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::DoesNotFit("paddle"));
        }
        if 2 * (self.paddle_margin + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::DoesNotFit("paddles"));
        }
        if self.ball_size >= self.arena_height || self.ball_size >= self.arena_width {
            return Err(ConfigError::DoesNotFit("ball"));
        }

        Ok(())
    }
}

/// Why a [`Config`] was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroWinScore,
    AiFactorOutOfRange(f32),
    NotPositive(&'static str),
    DoesNotFit(&'static str),
    ServeFasterThanMax { serve: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWinScore => write!(f, "win score must be at least 1"),
            ConfigError::AiFactorOutOfRange(factor) => {
                write!(f, "AI follow factor {factor} must be in (0, 1]")
            }
            ConfigError::NotPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::DoesNotFit(what) => write!(f, "{what} does not fit inside the arena"),
            ConfigError::ServeFasterThanMax { serve, max } => {
                write!(f, "serve speed {serve} exceeds the maximum ball speed {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
