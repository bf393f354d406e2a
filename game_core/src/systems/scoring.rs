use crate::{Ball, Config, Events, Score, Serve, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    serve: &mut Serve,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.left() <= 0 {
            // AI scores, next serve goes toward the player
            score.increment(Side::Right);
            events.ai_scored = true;
            *serve = Serve::TowardPlayer;
            ball.reset(*serve, config);
        } else if ball.rect.right() >= config.arena_width {
            // Player scores, next serve goes toward the AI
            score.increment(Side::Left);
            events.player_scored = true;
            *serve = Serve::TowardAi;
            ball.reset(*serve, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Serve, Events) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Serve::default(),
            Events::new(),
        )
    }

    fn place_ball(world: &mut World, config: &Config, x: i32, speed_x: f32) -> hecs::Entity {
        let ball = create_ball(world, config);
        {
            let mut ball = world.get::<&mut Ball>(ball).unwrap();
            ball.rect.x = x;
            ball.speed.x = speed_x;
        }
        ball
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut serve, mut events) = setup_world();
        let ball = place_ball(&mut world, &config, 0, -8.0);

        check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(score, Score { player: 0, ai: 1 });
        assert!(events.ai_scored, "Should trigger ai_scored event");
        assert_eq!(serve, Serve::TowardPlayer);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.rect.center(), config.arena().center());
        assert_eq!(ball.speed, Vec2::new(-6.0, 3.0));
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut serve, mut events) = setup_world();
        serve = Serve::TowardPlayer;
        let ball = place_ball(&mut world, &config, 786, 8.0); // right edge = 800

        check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(score, Score { player: 1, ai: 0 });
        assert!(events.player_scored);
        assert_eq!(serve, Serve::TowardAi);
        assert_eq!(world.get::<&Ball>(ball).unwrap().speed, Vec2::new(6.0, 3.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut serve, mut events) = setup_world();
        place_ball(&mut world, &config, 1, -8.0);
        place_ball(&mut world, &config, 785, 8.0);

        check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.ai_scored && !events.player_scored, "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut serve, mut events) = setup_world();
        let ball = place_ball(&mut world, &config, -10, -8.0);

        check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);
        world.get::<&mut Ball>(ball).unwrap().rect.x = -3;
        check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(score.ai, 2, "Scores should accumulate");
        assert_eq!(score.player, 0);
    }
}
