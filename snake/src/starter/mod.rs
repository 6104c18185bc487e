use std::time::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tetra::graphics::text::Text;
use tetra::graphics::{self, DrawParams};
use tetra::math::Vec2;
use tetra::time::{self, Timestep};
use tetra::{Context, ContextBuilder, Event, Result, State};
use crate::input::Input;
use crate::session::{Mode, Session, Track, Cue};
use crate::settings::*;

mod resources;
use resources::*;

//
// Game

pub struct Game {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    resource_directory: &'static str
}

impl Game {
    pub fn new<S>(title: S, window_width: i32, window_height: i32) -> Self
        where S: std::string::ToString {
        Game {
            title: title.to_string(),
            window_width,
            window_height,
            resource_directory: "resources"
        }
    }

    pub fn set_resource_path(&mut self, path: &'static str) -> &mut Self {
        self.resource_directory = path;
        self
    }

    /// Opens the window and runs until it is closed. Any asset or audio
    /// failure during startup ends the run with that error.
    pub fn launch(&self) -> Result {
        let resource_directory = self.resource_directory;

        ContextBuilder::new(&self.title, self.window_width, self.window_height)
            .quit_on_escape(false)
            .timestep(Timestep::Fixed(START_FPS as f64))
            .build()?
            .run(|ctx| GameState::new(ctx, resource_directory))
    }
}

//
// GameState

pub struct GameState {
    session: Session<StdRng>,
    resources: Resources,
    jukebox: Jukebox,
    fps: u32,
    pending: Vec<Input>,
}

impl GameState {
    fn new(ctx: &mut Context, resource_directory: &str) -> Result<GameState> {
        let resources = Resources::load(ctx, resource_directory)?;
        let mut jukebox = Jukebox::load(resource_directory)?;
        let session = Session::new(StdRng::from_entropy(), Instant::now());

        jukebox.cue(ctx, Cue::Music(Track::Menu))?;

        Ok(GameState { session, resources, jukebox, fps: START_FPS, pending: Vec::new() })
    }

    /// Keeps the fixed timestep in line with the session's speed
    fn sync_timestep(&mut self, ctx: &mut Context) {
        if self.session.fps != self.fps {
            self.fps = self.session.fps;
            time::set_timestep(ctx, Timestep::Fixed(self.fps as f64));
            log::debug!("Running at {} fps", self.fps);
        }
    }

    fn text(&self, content: impl Into<String>) -> Text {
        Text::new(content, self.resources.font.clone())
    }

    /// Draws `text` centred horizontally with its top edge at `y`
    fn draw_centered(&self, ctx: &mut Context, mut text: Text, y: f32) {
        let width = text.get_bounds(ctx).map(|bounds| bounds.width).unwrap_or(0.0);
        let x = (WIDTH as f32 - width) / 2.0;

        text.draw(ctx, DrawParams::new().position(Vec2::new(x, y)).color(object_color()));
    }

    fn draw_start_menu(&self, ctx: &mut Context) {
        let (width, height) = (WIDTH as f32, HEIGHT as f32);

        if let Some(texture) = self.resources.texture(START_TEXTURE) {
            let scale = Vec2::new(
                width * 0.75 / texture.width() as f32,
                height * 0.75 / texture.height() as f32,
            );
            texture.draw(ctx, DrawParams::new().position(Vec2::new(width * 0.125, height * 0.125)).scale(scale));
        }

        self.draw_centered(ctx, self.text("Press any key to start"), height - 60.0);
        self.draw_centered(ctx, self.text("- A game by Hideo Kojima -"), height - 30.0);
    }

    fn draw_playing(&self, ctx: &mut Context) {
        self.session.snake.draw(ctx, &self.resources.cell, object_color());
        self.session.food.draw(ctx, &self.resources.cell, object_color());

        let mut score = self.text(format!("Score: {}", self.session.score));
        score.draw(ctx, DrawParams::new().position(Vec2::new(10.0, 10.0)).color(object_color()));
    }

    fn draw_game_over(&self, ctx: &mut Context) {
        let (width, height) = (WIDTH as f32, HEIGHT as f32);

        if let Some(texture) = self.resources.texture(GAME_OVER_TEXTURE) {
            let scale = Vec2::new(
                (WIDTH / 2) as f32 / texture.width() as f32,
                (HEIGHT / 2) as f32 / texture.height() as f32,
            );
            let x = (width - (WIDTH / 2) as f32) / 2.0;
            texture.draw(ctx, DrawParams::new().position(Vec2::new(x, height * 0.25)).scale(scale));
        }

        self.draw_centered(ctx, self.text("Game Over"), 10.0);
        self.draw_centered(ctx, self.text(format!("Final Score: {}", self.session.score)), 50.0);
        self.draw_centered(ctx, self.text("Press Enter to restart"), 90.0);
        self.draw_centered(ctx, self.text("BGM from Raym Agini's yt channel"), height - 50.0);
    }
}

impl State for GameState {
    fn event(&mut self, _: &mut Context, event: Event) -> Result {
        if let Event::KeyPressed { key } = event {
            self.pending.push(Input::from_tetra_key(key));
        }

        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) -> Result {
        let inputs = std::mem::take(&mut self.pending);
        let cues = self.session.frame(inputs, Instant::now());
        self.jukebox.cue_all(ctx, cues)?;
        self.sync_timestep(ctx);

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        graphics::clear(ctx, background_color());

        match self.session.mode {
            Mode::StartMenu => self.draw_start_menu(ctx),
            Mode::Playing => self.draw_playing(ctx),
            Mode::GameOver => self.draw_game_over(ctx),
        }

        Ok(())
    }
}
