pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed tick
pub fn step(
    world: &mut World,
    config: &Config,
    keys: &HeldKeys,
    score: &mut Score,
    serve: &mut Serve,
    events: &mut Events,
) {
    let arena = config.arena();

    // Clear events at start of tick
    events.clear();

    // 1. Held keys -> player paddle velocity
    apply_player_input(world, keys);

    // 2. Move paddles (player by velocity, AI toward the ball)
    move_paddles(world, &arena);

    // 3. Move ball, bouncing off top and bottom
    move_ball(world, &arena, events);

    // 4. Ball vs player, then ball vs AI
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited left or right)
    check_scoring(world, config, score, serve, events);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_spawn(side), config.paddle_speed(side));
    world.spawn((paddle, controller))
}

/// Helper to create the ball entity at the centre of the arena
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        config.ball_spawn(),
        config.ball_speed_initial,
        config.ball_serve_slope,
    ),))
}
