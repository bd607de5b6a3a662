use serde::{Deserialize, Serialize};

use crate::constants::{CONTINUE_ANCHOR, CONTINUE_TEXT, GAME_OVER_ANCHOR, GAME_OVER_TEXT};
use crate::game::Game;
use crate::geometry::Position;
use crate::segment::{layout, segment_line, segments};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

pub const SNAKE: Color = Color::rgb(0.0, 1.0, 1.0);
pub const CHERRY: Color = Color::rgb(1.0, 0.0, 0.0);
pub const COIN: Color = Color::rgb(1.0, 1.0, 0.0);
pub const SEGMENT_ON: Color = Color::rgb(1.0, 1.0, 1.0);

/// Draw sink for the presentation layer. Calls carry no result; whatever
/// backs the renderer owns its own failures.
pub trait Renderer {
    fn draw_quad(&mut self, position: Position, size: f32, color: Color);
    fn draw_segment_line(&mut self, from: Position, to: Position, color: Color);
}

/// Draws the lit segments of every supported character in `text`.
pub fn display_string<R: Renderer + ?Sized>(renderer: &mut R, text: &str, x: f32, y: f32) {
    for glyph in layout(text, x, y) {
        for index in segments(glyph.mask) {
            if let Some((from, to)) = segment_line(index, glyph.anchor) {
                renderer.draw_segment_line(from, to, SEGMENT_ON);
            }
        }
    }
}

/// One frame of the scene. Cells are inset by one unit on every side so
/// neighbouring cells stay visually separate.
pub fn draw_scene<R: Renderer + ?Sized>(renderer: &mut R, game: &Game) {
    let cell = game.playfield().body_size;
    let inset = Position::new(1.0, 1.0);
    let size = cell - 2.0;

    renderer.draw_quad(game.powerups().cherry() + inset, size, CHERRY);
    renderer.draw_quad(game.powerups().coin() + inset, size, COIN);

    let player = game.player();
    renderer.draw_quad(player.head() + inset, size, SNAKE);
    for cell in player.tail().iter() {
        renderer.draw_quad(*cell + inset, size, SNAKE);
    }

    if !player.alive() {
        display_string(renderer, GAME_OVER_TEXT, GAME_OVER_ANCHOR.x, GAME_OVER_ANCHOR.y);
        display_string(renderer, CONTINUE_TEXT, CONTINUE_ANCHOR.x, CONTINUE_ANCHOR.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::segment::glyph_mask;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        quads: Vec<(Position, f32, Color)>,
        lines: Vec<(Position, Position)>,
    }

    impl Renderer for Recorder {
        fn draw_quad(&mut self, position: Position, size: f32, color: Color) {
            self.quads.push((position, size, color));
        }

        fn draw_segment_line(&mut self, from: Position, to: Position, _color: Color) {
            self.lines.push((from, to));
        }
    }

    #[test]
    fn display_string_draws_one_line_per_lit_segment() {
        let mut recorder = Recorder::default();
        display_string(&mut recorder, "o!", 0.0, 0.0);
        assert_eq!(recorder.lines.len(), 8);
        assert!(recorder.quads.is_empty());
    }

    #[test]
    fn live_scene_has_no_text() {
        let game = Game::new(GameConfig::default()).expect("default config is valid");
        let mut recorder = Recorder::default();
        draw_scene(&mut recorder, &game);

        assert_eq!(recorder.quads.len(), 3);
        assert!(recorder.lines.is_empty());
        assert_eq!(recorder.quads[0], (Position::new(101.0, 101.0), 23.0, CHERRY));
        assert_eq!(recorder.quads[2].0, Position::new(1.0, 1.0));
    }

    #[test]
    fn dead_scene_shows_game_over_prompt() {
        let mut game = Game::new(GameConfig::default()).expect("default config is valid");
        game.player_mut().kill();
        let mut recorder = Recorder::default();
        draw_scene(&mut recorder, &game);

        let expected: u32 = GAME_OVER_TEXT
            .chars()
            .chain(CONTINUE_TEXT.chars())
            .filter_map(glyph_mask)
            .map(u16::count_ones)
            .sum();
        assert_eq!(recorder.lines.len(), expected as usize);
    }
}
