pub mod components;
pub mod settings;
pub mod tone;
pub mod snake;
pub mod food;
pub mod input;
pub mod session;
pub mod starter;

pub use components::*;
pub use session::{Session, Mode, Cue, Track, Effect};
pub use starter::Game;

pub use tetra;
