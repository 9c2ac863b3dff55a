//! Shape and text drawing for the fixed 800x600 playfield.

use game_core::{Paddle, Score};
use macroquad::prelude::*;

use crate::simulation::LocalGame;

/// Relative path checked for the score font at startup.
pub const FONT_PATH: &str = "assets/score_font.ttf";
pub const SCORE_FONT_SIZE: u16 = 48;
const SCORE_BASELINE_Y: f32 = 60.0;

/// Load the score font, degrading to the built-in font when the asset is
/// missing or unreadable.
pub async fn load_score_font() -> Option<Font> {
    match load_ttf_font(FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("score font {FONT_PATH} unavailable ({err}); using built-in font");
            None
        }
    }
}

/// Score line, left player first.
pub fn score_text(score: &Score) -> String {
    format!("{} - {}", score.left, score.right)
}

/// Draw paddles and ball as plain white shapes. World units map 1:1 to
/// window pixels.
pub fn draw_playfield(game: &LocalGame) {
    let config = &game.config;
    for (_e, paddle) in game.world.query::<&Paddle>().iter() {
        draw_rectangle(
            config.paddle_x(paddle.player_id) - config.paddle_width / 2.0,
            paddle.y - config.paddle_height / 2.0,
            config.paddle_width,
            config.paddle_height,
            WHITE,
        );
    }
    if let Some((x, y)) = game.ball_pos() {
        draw_circle(x, y, config.ball_radius, WHITE);
    }
}

/// Draw the score line centered horizontally near the top edge.
pub fn draw_score(score: &Score, font: Option<&Font>) {
    let text = score_text(score);
    let dims = measure_text(&text, font, SCORE_FONT_SIZE, 1.0);
    draw_text_ex(
        &text,
        (screen_width() - dims.width) / 2.0,
        SCORE_BASELINE_Y,
        TextParams {
            font,
            font_size: SCORE_FONT_SIZE,
            color: WHITE,
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text_format() {
        let mut score = Score::new();
        assert_eq!(score_text(&score), "0 - 0");
        score.increment_left();
        score.increment_right();
        score.increment_right();
        assert_eq!(score_text(&score), "1 - 2");
    }
}
