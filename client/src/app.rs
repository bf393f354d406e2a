//! Window, event loop and tick pacing

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use game_core::{Config, Control, ControlEvent, Flow, Game};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::input::control_event;
use crate::renderer::Renderer;
use crate::scene::build_scene;

pub const WINDOW_TITLE: &str = "Pong vs AI";

/// Owns the game and every window/GPU resource for the lifetime of the loop
pub struct App {
    game: Game,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    next_tick: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            game: Game::new(config),
            window: None,
            renderer: None,
            next_tick: Instant::now(),
            error: None,
        }
    }

    /// Result of the run once the event loop has returned
    pub fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let arena = self.game.config().arena();
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(arena.width as f64, arena.height as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| anyhow!("Failed to create window: {e}"))?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), arena))?;
        log::info!(
            "Window ready ({}x{} physical)",
            renderer.size.0,
            renderer.size.1
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.next_tick = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_control(&mut self, event_loop: &ActiveEventLoop, event: ControlEvent) {
        if self.game.handle(event) == Flow::Quit {
            event_loop.exit();
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        renderer.draw(&build_scene(&self.game))
    }
}

/// Time between ticks at `rate` ticks per second
pub fn tick_interval(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}

/// Next tick deadline. Missed ticks are dropped rather than replayed.
pub fn next_deadline(scheduled: Instant, now: Instant, interval: Duration) -> Instant {
    let next = scheduled + interval;
    if next <= now {
        now + interval
    } else {
        next
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.init_window(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.handle_control(event_loop, ControlEvent::pressed(Control::Quit));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(control) = control_event(&event) {
                    self.handle_control(event_loop, control);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.render() {
                    self.fail(event_loop, error);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_tick {
            self.game.tick();
            let interval = tick_interval(self.game.tick_rate());
            self.next_tick = next_deadline(self.next_tick, now, interval);
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval(60), Duration::from_nanos(16_666_666));
        assert_eq!(tick_interval(30), Duration::from_nanos(33_333_333));
        assert_eq!(tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_next_deadline_on_schedule() {
        let start = Instant::now();
        let interval = Duration::from_millis(16);
        let now = start + Duration::from_millis(2);
        assert_eq!(next_deadline(start, now, interval), start + interval);
    }

    #[test]
    fn test_next_deadline_drops_missed_ticks() {
        let start = Instant::now();
        let interval = Duration::from_millis(16);
        let now = start + Duration::from_millis(100);
        assert_eq!(next_deadline(start, now, interval), now + interval);
    }
}
