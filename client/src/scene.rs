//! Frame contents
//!
//! Turns the current game state into a flat list of coloured rectangles:
//! midline, paddles, ball, then text on top.

use game_core::{Arena, Game, Phase, Rect, Side};
use glam::IVec2;

use crate::renderer::InstanceData;
use crate::text::{layout_centered, text_size};

/// Colours as 8-bit RGB
pub struct Palette;

impl Palette {
    pub const BACKGROUND: [u8; 3] = [18, 18, 18];
    pub const FOREGROUND: [u8; 3] = [240, 240, 240];
    pub const MIDLINE: [u8; 3] = [80, 80, 80];
    pub const HELP_TEXT: [u8; 3] = [180, 180, 180];
}

pub const HELP_TEXT: &str = "CONTROLS: W/S TO MOVE UP/DOWN, ESC OR CLOSE WINDOW TO QUIT";
pub const RESTART_HINT: &str = "PRESS R TO RESTART OR ESC TO QUIT";

const SCORE_SCALE: i32 = 5;
const SCORE_CENTER_Y: i32 = 40;
const HELP_SCALE: i32 = 2;
const HELP_BOTTOM_OFFSET: i32 = 32;
const WINNER_SCALE: i32 = 5;
const HINT_SCALE: i32 = 2;

const DASH_WIDTH: i32 = 4;
const DASH_HEIGHT: i32 = 16;
const DASH_GAP: i32 = 12;

pub fn tint(rgb: [u8; 3]) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        1.0,
    ]
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: [f32; 4],
    pub instances: Vec<InstanceData>,
}

impl Scene {
    fn new() -> Self {
        Self {
            background: tint(Palette::BACKGROUND),
            instances: Vec::new(),
        }
    }

    fn push_rect(&mut self, rect: Rect, color: [u8; 3]) {
        self.instances.push(InstanceData {
            transform: [rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32],
            tint: tint(color),
        });
    }

    fn push_rects(&mut self, rects: impl IntoIterator<Item = Rect>, color: [u8; 3]) {
        for rect in rects {
            self.push_rect(rect, color);
        }
    }
}

/// Dashed vertical line down the centre of the arena
pub fn midline_dashes(arena: &Arena) -> Vec<Rect> {
    let x = arena.width / 2 - DASH_WIDTH / 2;
    (0..arena.height)
        .step_by((DASH_HEIGHT + DASH_GAP) as usize)
        .map(|y| Rect::new(x, y, DASH_WIDTH, DASH_HEIGHT))
        .collect()
}

pub fn winner_text(winner: Side) -> &'static str {
    match winner {
        Side::Left => "PLAYER WINS!",
        Side::Right => "AI WINS!",
    }
}

pub fn build_scene(game: &Game) -> Scene {
    let arena = game.config().arena();
    let mut scene = Scene::new();

    scene.push_rects(midline_dashes(&arena), Palette::MIDLINE);

    let paddles = [game.player_paddle(), game.ai_paddle()];
    for paddle in paddles.into_iter().flatten() {
        scene.push_rect(paddle.rect, Palette::FOREGROUND);
    }
    if let Some(ball) = game.ball() {
        scene.push_rect(ball.rect, Palette::FOREGROUND);
    }

    let score = game.score();
    let score_text = format!("{}   {}", score.player, score.ai);
    scene.push_rects(
        layout_centered(
            &score_text,
            IVec2::new(arena.width / 2, SCORE_CENTER_Y),
            SCORE_SCALE,
        ),
        Palette::FOREGROUND,
    );

    let help_size = text_size(HELP_TEXT, HELP_SCALE);
    let help_center = IVec2::new(
        arena.width / 2,
        arena.height - HELP_BOTTOM_OFFSET + help_size.y / 2,
    );
    scene.push_rects(
        layout_centered(HELP_TEXT, help_center, HELP_SCALE),
        Palette::HELP_TEXT,
    );

    if let Phase::WonFrozen { winner } = game.phase() {
        let center = arena.center();
        scene.push_rects(
            layout_centered(
                winner_text(winner),
                center - IVec2::new(0, 24),
                WINNER_SCALE,
            ),
            Palette::FOREGROUND,
        );
        scene.push_rects(
            layout_centered(RESTART_HINT, center + IVec2::new(0, 24), HINT_SCALE),
            Palette::FOREGROUND,
        );
    }

    scene
}
