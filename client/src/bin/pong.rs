//! Scored single-player variant: W/S against an AI-tracked right paddle,
//! with the score line rendered centered at the top.

use client::{input, render, setup_logging, simulation::LocalGame};
use game_core::Config;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "PONG".to_string(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    setup_logging();
    log::info!("starting pong (scored) variant");

    let font = render::load_score_font().await;
    let mut game = LocalGame::new(Config::new(), true);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Arrow keys are ignored: the right paddle is AI-controlled
        game.push_input(0, input::player_one_dir());
        game.step(get_frame_time());

        if game.events.left_scored {
            log::info!("point to player one ({})", render::score_text(&game.score));
        }
        if game.events.right_scored {
            log::info!("point to player two ({})", render::score_text(&game.score));
        }

        clear_background(BLACK);
        render::draw_playfield(&game);
        render::draw_score(&game.score, font.as_ref());

        next_frame().await;
    }

    log::info!(
        "window closed, final score {}",
        render::score_text(&game.score)
    );
}
