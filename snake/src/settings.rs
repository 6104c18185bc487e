use std::time::Duration;
use tetra::graphics::Color;

pub const TITLE: &str = "Snake Game";

pub const WIDTH: i32 = 600;
pub const HEIGHT: i32 = 600;
pub const CELL_SIZE: i32 = 20;

pub const START_FPS: u32 = 10;
pub const MAX_FPS: u32 = 30;
pub const SCORE_INCREMENT: u32 = 10;

/// Minimum wall-clock gap between two accepted direction changes
pub const DIRECTION_CHANGE_INTERVAL: Duration = Duration::from_millis(100);

pub const FONT_SIZE: f32 = 15.0;

//
// Palette

pub fn background_color() -> Color {
    Color::rgb8(169, 224, 0)
}

pub fn object_color() -> Color {
    Color::rgb8(56, 73, 2)
}

//
// Assets, relative to the resource directory

pub const FONT_FILE: &str = "Quinquefive-ALoRM.ttf";
pub const MENU_MUSIC_FILE: &str = "S;G-Village.mp3";
pub const GAMEPLAY_MUSIC_FILE: &str = "S;G-Laboratory.mp3";
pub const GAME_OVER_MUSIC_FILE: &str = "S;G-Solitude.mp3";

/// Texture names are file stems, as collected by the resource scan
pub const START_TEXTURE: &str = "start";
pub const GAME_OVER_TEXTURE: &str = "gameOver";

//
// Sound effects

pub const EAT_TONE_HZ: f32 = 900.0;
pub const EAT_TONE_SECONDS: f32 = 0.2;
pub const DEATH_TONE_HZ: f32 = 120.0;
pub const DEATH_TONE_SECONDS: f32 = 0.3;
pub const TONE_VOLUME: f32 = 0.5;
