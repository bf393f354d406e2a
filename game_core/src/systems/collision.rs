use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Bounce the ball off each paddle, player side first
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles without holding a borrow on the world
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.collide_paddle(paddle, config) {
                events.ball_hit_paddle = true;
            }
        }
    }
}
