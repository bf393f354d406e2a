use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn held keys into velocity for keyboard-driven paddles
pub fn apply_player_input(world: &mut World, keys: &HeldKeys) {
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Keyboard {
            paddle.vel_y = keys.direction() * paddle.speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_keys_set_player_velocity() {
        let config = Config::new();
        let mut world = World::new();
        let player = create_paddle(&mut world, &config, Side::Left, Controller::Keyboard);

        let keys = HeldKeys {
            up: true,
            down: false,
        };
        apply_player_input(&mut world, &keys);
        assert_eq!(world.get::<&Paddle>(player).unwrap().vel_y, -9);

        let keys = HeldKeys {
            up: false,
            down: true,
        };
        apply_player_input(&mut world, &keys);
        assert_eq!(world.get::<&Paddle>(player).unwrap().vel_y, 9);

        apply_player_input(&mut world, &HeldKeys::new());
        assert_eq!(world.get::<&Paddle>(player).unwrap().vel_y, 0);
    }

    #[test]
    fn test_keys_ignore_ai_paddle() {
        let config = Config::new();
        let mut world = World::new();
        let ai = create_paddle(
            &mut world,
            &config,
            Side::Right,
            Controller::FollowBall { factor: 0.95 },
        );

        let keys = HeldKeys {
            up: true,
            down: false,
        };
        apply_player_input(&mut world, &keys);
        assert_eq!(world.get::<&Paddle>(ai).unwrap().vel_y, 0);
    }
}
