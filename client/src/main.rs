//! Desktop client
//!
//! Single-player Pong against a scripted AI paddle, drawn with wgpu in a winit
//! window.

mod app;
mod camera;
mod cli;
mod input;
mod mesh;
mod renderer;
mod scene;
mod text;

use anyhow::{anyhow, Context};
use clap::Parser;
use winit::event_loop::EventLoop;

use crate::app::App;
use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    config.validate().context("Invalid game configuration")?;
    log::info!(
        "Starting Pong: first to {}, AI factor {}, ball speed {}",
        config.win_score,
        config.ai_follow_factor,
        config.ball_speed_initial
    );

    let event_loop = EventLoop::new().map_err(|e| anyhow!("Failed to create event loop: {e}"))?;
    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop error: {e}"))?;

    app.finish()
}
