//! Unscored variant: two human paddles, no left/right handling. A missed
//! ball simply leaves the window.

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
    log::info!("starting rally (unscored) variant");

    let mut game = LocalGame::new(Config::rally(), false);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        game.push_input(0, input::player_one_dir());
        game.push_input(1, input::player_two_dir());
        game.step(get_frame_time());

        clear_background(BLACK);
        render::draw_playfield(&game);

        next_frame().await;
    }

    log::info!("window closed");
}
