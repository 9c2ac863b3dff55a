//! Keyboard input handling

use macroquad::prelude::{is_key_down, KeyCode};

/// Combine an up/down key pair into a paddle direction.
/// Both keys held cancel out.
pub fn dir_from_keys(up: bool, down: bool) -> i8 {
    let mut dir = 0;
    if up {
        dir -= 1;
    }
    if down {
        dir += 1;
    }
    dir
}

/// W/S for player one (left paddle)
pub fn player_one_dir() -> i8 {
    dir_from_keys(is_key_down(KeyCode::W), is_key_down(KeyCode::S))
}

/// Up/Down arrows for player two (right paddle)
pub fn player_two_dir() -> i8 {
    dir_from_keys(is_key_down(KeyCode::Up), is_key_down(KeyCode::Down))
}
