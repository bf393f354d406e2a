//! Game state machine
//!
//! Owns the world and per-match resources, and switches between play and the
//! frozen post-win screen.

use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Config, Controller, Events, HeldKeys, Paddle, Score,
    Serve, Side,
};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// A side reached the win score; nothing moves until restart
    WonFrozen { winner: Side },
}

/// Player controls, independent of the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Restart,
    Quit,
}

/// A control being pressed or released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent {
    pub control: Control,
    pub pressed: bool,
}

impl ControlEvent {
    pub fn pressed(control: Control) -> Self {
        Self {
            control,
            pressed: true,
        }
    }

    pub fn released(control: Control) -> Self {
        Self {
            control,
            pressed: false,
        }
    }
}

/// What the host loop should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game {
    world: World,
    config: Config,
    score: Score,
    serve: Serve,
    events: Events,
    keys: HeldKeys,
    phase: Phase,
    ticks: u64,
    player: Entity,
    ai: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let player = create_paddle(&mut world, &config, Side::Left, Controller::Keyboard);
        let ai = create_paddle(
            &mut world,
            &config,
            Side::Right,
            Controller::FollowBall {
                factor: config.ai_follow_factor,
            },
        );
        let ball = create_ball(&mut world, &config);

        let mut game = Self {
            world,
            config,
            score: Score::new(),
            serve: Serve::default(),
            events: Events::new(),
            keys: HeldKeys::new(),
            phase: Phase::Playing,
            ticks: 0,
            player,
            ai,
            ball,
        };
        game.reset_ball();
        game
    }

    /// Apply one input event. Quit is honoured in every phase, restart only
    /// while frozen.
    pub fn handle(&mut self, event: ControlEvent) -> Flow {
        match event.control {
            Control::Up => self.keys.up = event.pressed,
            Control::Down => self.keys.down = event.pressed,
            Control::Quit => {
                if event.pressed {
                    log::info!("Quit requested after {} ticks", self.ticks);
                    return Flow::Quit;
                }
            }
            Control::Restart => {
                if event.pressed && matches!(self.phase, Phase::WonFrozen { .. }) {
                    self.restart();
                }
            }
        }
        Flow::Continue
    }

    /// Run one simulation tick. Does nothing while frozen.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            &self.keys,
            &mut self.score,
            &mut self.serve,
            &mut self.events,
        );
        self.ticks += 1;

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.events.game_won = true;
            self.phase = Phase::WonFrozen { winner };
        }
        self.log_events();
    }

    fn log_events(&self) {
        let events = &self.events;
        if events.ball_hit_wall {
            log::trace!("Ball hit wall at tick {}", self.ticks);
        }
        if events.ball_hit_paddle {
            log::trace!("Ball hit paddle at tick {}", self.ticks);
        }
        if events.player_scored || events.ai_scored {
            log::debug!(
                "Score {}-{} at tick {}",
                self.score.player,
                self.score.ai,
                self.ticks
            );
        }
        if let (true, Phase::WonFrozen { winner }) = (events.game_won, self.phase) {
            log::info!(
                "{:?} wins {}-{}",
                winner,
                self.score.player,
                self.score.ai
            );
        }
    }

    /// Ticks per second for the current phase
    pub fn tick_rate(&self) -> u32 {
        match self.phase {
            Phase::Playing => self.config.tick_rate,
            Phase::WonFrozen { .. } => self.config.frozen_tick_rate,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn serve(&self) -> Serve {
        self.serve
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.player).ok().map(|p| *p)
    }

    pub fn ai_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.ai).ok().map(|p| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    /// Direct world access for scripted scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    fn restart(&mut self) {
        self.score.reset();
        self.serve = Serve::TowardAi;
        self.reset_ball();
        self.phase = Phase::Playing;
        log::info!("Restarted");
    }

    fn reset_ball(&mut self) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(self.serve, &self.config);
        }
    }
}
