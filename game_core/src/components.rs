use std::cmp::Ordering;

use glam::Vec2;

use crate::map::{Arena, Rect};
use crate::{Config, Serve};

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,  // Human player
    Right, // AI
}

/// How a paddle is driven each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Controller {
    /// Velocity comes from held keys
    Keyboard,
    /// Chases the ball's vertical centre at `speed * factor`
    FollowBall { factor: f32 },
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub speed: i32, // Max pixels per tick
    pub vel_y: i32, // Manual mode only
}

impl Paddle {
    pub fn new(side: Side, rect: Rect, speed: i32) -> Self {
        Self {
            side,
            rect,
            speed,
            vel_y: 0,
        }
    }

    /// Apply the manual velocity, then clamp to the arena
    pub fn update(&mut self, arena: &Arena) {
        self.rect.y += self.vel_y;
        arena.clamp_vertical(&mut self.rect);
    }

    /// Bang-bang step toward `target_y`: full `speed * factor` in the target's
    /// direction, nothing when the centre is exactly on target.
    /// The step is truncated toward zero before it is applied.
    pub fn follow(&mut self, target_y: i32, speed_factor: f32, arena: &Arena) {
        let step = self.speed as f32 * speed_factor;
        let desired = match self.rect.center_y().cmp(&target_y) {
            Ordering::Less => step,
            Ordering::Greater => -step,
            Ordering::Equal => 0.0,
        };
        self.rect.y += desired as i32;
        arena.clamp_vertical(&mut self.rect);
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub speed: Vec2,
    pub start_speed: f32,
}

impl Ball {
    pub fn new(rect: Rect, start_speed: f32, serve_slope: f32) -> Self {
        Self {
            rect,
            speed: Vec2::new(start_speed, start_speed * serve_slope),
            start_speed,
        }
    }

    /// Move one tick and bounce off the top and bottom edges.
    /// Returns true when an edge was hit.
    pub fn update(&mut self, arena: &Arena) -> bool {
        // `as i32` truncates toward zero
        self.rect.x += self.speed.x as i32;
        self.rect.y += self.speed.y as i32;

        let mut bounced = false;
        if self.rect.top() <= 0 {
            self.rect.set_top(0);
            self.speed.y = -self.speed.y;
            bounced = true;
        }
        if self.rect.bottom() >= arena.height {
            self.rect.set_bottom(arena.height);
            self.speed.y = -self.speed.y;
            bounced = true;
        }
        bounced
    }

    /// Bounce off a paddle if overlapping it. Returns true on contact.
    pub fn collide_paddle(&mut self, paddle: &Paddle, config: &Config) -> bool {
        if !self.rect.intersects(&paddle.rect) {
            return false;
        }

        // Push fully outside so the ball cannot stick
        if self.speed.x > 0.0 {
            self.rect.set_right(paddle.rect.left());
        } else {
            self.rect.set_left(paddle.rect.right());
        }

        self.speed.x = -self.speed.x;

        // Deflection depends on where the paddle was hit: -1 top, 0 centre, +1 bottom
        let half_height = paddle.rect.h as f32 / 2.0;
        let offset = (self.rect.center_y() - paddle.rect.center_y()) as f32 / half_height;
        let max_angle = config.ball_max_angle_speed;
        self.speed.y = (offset * max_angle).clamp(-max_angle, max_angle);

        if self.speed.x > 0.0 {
            self.speed.x = (self.speed.x + config.ball_speed_increase).min(config.ball_speed_max);
        } else {
            self.speed.x = (self.speed.x - config.ball_speed_increase).max(-config.ball_speed_max);
        }

        true
    }

    /// Recentre and serve toward the given side at the fixed initial angle
    pub fn reset(&mut self, serve: Serve, config: &Config) {
        self.rect.set_center(config.arena().center());
        self.speed = Vec2::new(
            self.start_speed * serve.sign(),
            self.start_speed * config.ball_serve_slope,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Config::new().arena()
    }

    fn paddle_at(x: i32, y: i32) -> Paddle {
        Paddle::new(Side::Right, Rect::new(x, y, 12, 100), 8)
    }

    fn ball_at(x: i32, y: i32, speed: Vec2) -> Ball {
        let mut ball = Ball::new(Rect::new(x, y, 14, 14), 6.0, 0.5);
        ball.speed = speed;
        ball
    }

    #[test]
    fn test_paddle_update_zero_velocity_is_idempotent() {
        let mut paddle = paddle_at(24, 250);
        paddle.update(&arena());
        paddle.update(&arena());
        assert_eq!(paddle.rect, Rect::new(24, 250, 12, 100));
    }

    #[test]
    fn test_paddle_update_clamps_overshoot() {
        let arena = arena();

        let mut paddle = paddle_at(24, 4);
        paddle.vel_y = -9;
        paddle.update(&arena);
        assert_eq!(paddle.rect.top(), 0);

        let mut paddle = paddle_at(24, 495);
        paddle.vel_y = 9;
        paddle.update(&arena);
        assert_eq!(paddle.rect.bottom(), 600);

        let mut paddle = paddle_at(24, 100);
        paddle.vel_y = 10_000;
        paddle.update(&arena);
        assert_eq!(paddle.rect.bottom(), 600);
    }

    #[test]
    fn test_follow_moves_toward_target_with_truncated_step() {
        let arena = arena();
        let mut paddle = paddle_at(764, 250); // centre 300

        paddle.follow(400, 0.95, &arena);
        assert_eq!(paddle.rect.top(), 257, "8 * 0.95 = 7.6 truncates to 7");

        paddle.follow(0, 0.95, &arena);
        assert_eq!(paddle.rect.top(), 250);
    }

    #[test]
    fn test_follow_dead_zone_is_exact() {
        let arena = arena();
        let mut paddle = paddle_at(764, 250);
        paddle.follow(300, 0.95, &arena);
        assert_eq!(paddle.rect.top(), 250, "Centred paddle should not move");

        paddle.follow(301, 0.95, &arena);
        assert_eq!(
            paddle.rect.top(),
            257,
            "Any offset produces a full step, not a proportional one"
        );
    }

    #[test]
    fn test_follow_clamps_to_arena() {
        let arena = arena();
        let mut paddle = paddle_at(764, 3);
        paddle.follow(-500, 1.0, &arena);
        assert_eq!(paddle.rect.top(), 0);

        let mut paddle = paddle_at(764, 497);
        paddle.follow(10_000, 1.0, &arena);
        assert_eq!(paddle.rect.bottom(), 600);
    }

    #[test]
    fn test_ball_update_truncates_speed() {
        let mut ball = ball_at(100, 100, Vec2::new(6.9, -2.7));
        ball.update(&arena());
        assert_eq!((ball.rect.x, ball.rect.y), (106, 98));
    }

    #[test]
    fn test_ball_bounces_off_bottom_edge() {
        let mut ball = ball_at(400, 583, Vec2::new(6.0, 7.5));
        let bounced = ball.update(&arena());

        assert!(bounced);
        assert_eq!(ball.rect.bottom(), 600, "Ball should be clamped to the bottom edge");
        assert_eq!(ball.speed.y, -7.5, "Vertical speed reflected without loss");
        assert_eq!(ball.speed.x, 6.0);
    }

    #[test]
    fn test_ball_bounces_off_top_edge() {
        let mut ball = ball_at(400, 2, Vec2::new(-6.0, -3.0));
        assert!(ball.update(&arena()));
        assert_eq!(ball.rect.top(), 0);
        assert_eq!(ball.speed.y, 3.0);
    }

    #[test]
    fn test_ball_stays_in_vertical_bounds() {
        let arena = arena();
        let mut ball = ball_at(400, 300, Vec2::new(3.0, 7.5));
        for _ in 0..500 {
            ball.update(&arena);
            assert!(ball.rect.top() >= 0);
            assert!(ball.rect.bottom() <= arena.height);
        }
    }

    #[test]
    fn test_collide_from_left_touches_paddle_left_edge() {
        let config = Config::new();
        let paddle = paddle_at(764, 250);
        let mut ball = ball_at(755, 293, Vec2::new(6.0, 3.0));

        assert!(ball.collide_paddle(&paddle, &config));
        assert_eq!(ball.rect.right(), paddle.rect.left());
        assert!(!ball.rect.intersects(&paddle.rect));
        assert_eq!(ball.speed.x, -6.5);
    }

    #[test]
    fn test_collide_from_right_touches_paddle_right_edge() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, Rect::new(24, 250, 12, 100), 9);
        let mut ball = ball_at(30, 293, Vec2::new(-6.0, 3.0));

        assert!(ball.collide_paddle(&paddle, &config));
        assert_eq!(ball.rect.left(), paddle.rect.right());
        assert!(!ball.rect.intersects(&paddle.rect));
        assert_eq!(ball.speed.x, 6.5);
    }

    #[test]
    fn test_no_collision_without_overlap() {
        let config = Config::new();
        let paddle = paddle_at(764, 250);
        let mut ball = ball_at(750, 293, Vec2::new(6.0, 3.0));
        let before = ball;

        assert!(!ball.collide_paddle(&paddle, &config));
        assert_eq!(ball, before);
    }

    #[test]
    fn test_deflection_at_centre_top_and_bottom() {
        let config = Config::new();
        let paddle = paddle_at(764, 250); // centre y 300, top 250, bottom 350

        let mut centre = ball_at(755, 293, Vec2::new(6.0, 3.0));
        centre.collide_paddle(&paddle, &config);
        assert_eq!(centre.speed.y, 0.0);

        let mut top = ball_at(755, 243, Vec2::new(6.0, 3.0)); // centre y 250
        top.collide_paddle(&paddle, &config);
        assert_eq!(top.speed.y, -7.5);

        let mut bottom = ball_at(755, 343, Vec2::new(6.0, 3.0)); // centre y 350
        bottom.collide_paddle(&paddle, &config);
        assert_eq!(bottom.speed.y, 7.5);

        let mut corner = ball_at(755, 237, Vec2::new(6.0, 3.0)); // centre above the paddle
        corner.collide_paddle(&paddle, &config);
        assert_eq!(corner.speed.y, -7.5, "Deflection is clamped");
    }

    #[test]
    fn test_speed_saturates_after_repeated_hits() {
        let config = Config::new();
        let paddle = paddle_at(764, 250);
        let mut ball = ball_at(755, 293, Vec2::new(6.0, 0.0));

        for hit in 1..=30 {
            ball.rect.x = 755;
            ball.speed.x = ball.speed.x.abs();
            assert!(ball.collide_paddle(&paddle, &config));

            let expected = (6.0 + 0.5 * hit as f32).min(12.0);
            assert_eq!(ball.speed.x, -expected, "hit {hit}");
        }
        assert_eq!(ball.speed.x.abs(), 12.0);
    }

    #[test]
    fn test_reset_serves_from_centre() {
        let config = Config::new();
        let mut ball = ball_at(-20, 17, Vec2::new(-11.5, 7.5));

        ball.reset(Serve::TowardPlayer, &config);
        assert_eq!(ball.rect.center(), config.arena().center());
        assert_eq!(ball.speed, Vec2::new(-6.0, 3.0));

        ball.reset(Serve::TowardAi, &config);
        assert_eq!(ball.speed, Vec2::new(6.0, 3.0));
    }
}
