//! Keyboard input handling

use game_core::InputState;

/// Handle key down event
pub fn handle_key_down(key: &str, mut input: InputState) -> InputState {
    match key {
        "ArrowUp" | "w" | "W" => input.up = true,
        "ArrowDown" | "s" | "S" => input.down = true,
        _ => {}
    }
    input
}

/// Handle key up event
pub fn handle_key_up(key: &str, mut input: InputState) -> InputState {
    match key {
        "ArrowUp" | "w" | "W" => input.up = false,
        "ArrowDown" | "s" | "S" => input.down = false,
        _ => {}
    }
    input
}
