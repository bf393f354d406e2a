use clap::Parser;
use game_core::{Config, Params};

/// Single-player Pong against a scripted AI paddle
#[derive(Debug, Parser)]
#[command(name = "pong", version)]
pub struct Cli {
    /// Points needed to win a match
    #[arg(long, default_value_t = Params::WIN_SCORE)]
    pub win_score: u8,

    /// Fraction of its top speed the AI paddle moves at, in (0, 1]
    #[arg(long, default_value_t = Params::AI_FOLLOW_FACTOR)]
    pub ai_factor: f32,

    /// Serve speed of the ball in pixels per tick
    #[arg(long, default_value_t = Params::BALL_SPEED_INITIAL)]
    pub ball_speed: f32,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            win_score: self.win_score,
            ai_follow_factor: self.ai_factor,
            ball_speed_initial: self.ball_speed,
            ..Config::default()
        }
    }
}
