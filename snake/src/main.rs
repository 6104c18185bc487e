use snake::settings::{HEIGHT, TITLE, WIDTH};
use snake::Game;

fn main() -> tetra::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Game::new(TITLE, WIDTH, HEIGHT)
        .set_resource_path(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"))
        .launch()
}
