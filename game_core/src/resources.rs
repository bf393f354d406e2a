use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8, // Left paddle
    pub ai: u8,     // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.player = self.player.saturating_add(1),
            Side::Right => self.ai = self.ai.saturating_add(1),
        }
    }

    /// Winner once either side reaches `win_score`; ties go to the AI
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score || self.ai >= win_score {
            if self.player > self.ai {
                Some(Side::Left)
            } else {
                Some(Side::Right)
            }
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Direction of the next serve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Serve {
    TowardPlayer,
    #[default]
    TowardAi,
}

impl Serve {
    /// -1 launches the ball left, +1 right
    pub fn sign(self) -> f32 {
        match self {
            Serve::TowardPlayer => -1.0,
            Serve::TowardAi => 1.0,
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub game_won: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.game_won = false;
    }
}

/// Held state of the two movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1 = up, 0 = stop, 1 = down. Both keys held cancel out.
    pub fn direction(&self) -> i32 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Right);
        score.increment(Side::Right);
        assert_eq!(score, Score { player: 1, ai: 2 });
    }

    #[test]
    fn test_score_has_winner_player() {
        let score = Score { player: 10, ai: 4 };
        assert_eq!(score.has_winner(10), Some(Side::Left));
    }

    #[test]
    fn test_score_has_winner_ai() {
        let score = Score { player: 9, ai: 10 };
        assert_eq!(score.has_winner(10), Some(Side::Right));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { player: 9, ai: 9 };
        assert_eq!(score.has_winner(10), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { player: 3, ai: 10 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_serve_sign() {
        assert_eq!(Serve::default(), Serve::TowardAi);
        assert_eq!(Serve::TowardAi.sign(), 1.0);
        assert_eq!(Serve::TowardPlayer.sign(), -1.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            player_scored: true,
            ai_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
            game_won: true,
        };
        events.clear();
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_held_keys_direction() {
        let mut keys = HeldKeys::new();
        assert_eq!(keys.direction(), 0);

        keys.up = true;
        assert_eq!(keys.direction(), -1);

        keys.down = true;
        assert_eq!(keys.direction(), 0, "Opposite keys cancel");

        keys.up = false;
        assert_eq!(keys.direction(), 1);
    }
}
