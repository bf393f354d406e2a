use crate::{Arena, Ball, Controller, Events, Paddle};
use hecs::World;

/// Move paddles: keyboard paddles by velocity, followers toward the ball.
/// Followers target the ball's centre before the ball moves this tick.
pub fn move_paddles(world: &mut World, arena: &Arena) {
    let target_y = world
        .query_mut::<&Ball>()
        .into_iter()
        .next()
        .map(|(_e, ball)| ball.rect.center_y());

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        match *controller {
            Controller::Keyboard => paddle.update(arena),
            Controller::FollowBall { factor } => {
                if let Some(target_y) = target_y {
                    paddle.follow(target_y, factor, arena);
                }
            }
        }
    }
}

/// Move ball and bounce it off the top and bottom edges
pub fn move_ball(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.update(arena) {
            events.ball_hit_wall = true;
        }
    }
}
