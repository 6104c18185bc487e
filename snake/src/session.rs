//! The game session: mode, score, speed and the two entities.
//!
//! Nothing in here touches a tetra context. Audio side effects come back to
//! the caller as [`Cue`]s so the rules can run headless.

use std::time::Instant;
use rand::Rng;
use crate::food::Food;
use crate::input::Input;
use crate::settings::{CELL_SIZE, HEIGHT, MAX_FPS, SCORE_INCREMENT, START_FPS, WIDTH};
use crate::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    StartMenu,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    Menu,
    Gameplay,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    Eat,
    Death,
}

/// Audio work requested by a session step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Stop whatever music is playing and loop this track
    Music(Track),

    /// Play a sound effect once
    Play(Effect),
}

pub struct Session<R: Rng> {
    pub mode: Mode,
    pub score: u32,
    pub fps: u32,
    pub snake: Snake,
    pub food: Food,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(mut rng: R, now: Instant) -> Self {
        Session {
            mode: Mode::StartMenu,
            score: 0,
            fps: START_FPS,
            snake: Snake::new(CELL_SIZE, WIDTH, HEIGHT, now),
            food: Food::new(CELL_SIZE, WIDTH, HEIGHT, &mut rng),
            rng,
        }
    }

    /// Back to the start menu with a fresh snake, food, score and speed.
    pub fn reset(&mut self, now: Instant) -> Vec<Cue> {
        self.score = 0;
        self.fps = START_FPS;
        self.snake = Snake::new(CELL_SIZE, WIDTH, HEIGHT, now);
        self.food = Food::new(CELL_SIZE, WIDTH, HEIGHT, &mut self.rng);
        self.mode = Mode::StartMenu;

        log::info!("Session reset, back to the start menu");
        vec![Cue::Music(Track::Menu)]
    }

    /// Applies one key press. Each press causes at most one transition or
    /// one direction change request.
    pub fn handle_input(&mut self, input: Input, now: Instant) -> Vec<Cue> {
        match (self.mode, input) {
            (Mode::StartMenu, _) => {
                self.mode = Mode::Playing;
                log::info!("Starting game");
                vec![Cue::Music(Track::Gameplay)]
            }
            (Mode::Playing, Input::Steer(direction)) => {
                self.snake.change_direction(direction, now);
                vec![]
            }
            (Mode::GameOver, Input::Confirm) => self.reset(now),
            _ => vec![],
        }
    }

    /// One tick of the game: every key pressed since the last tick, all
    /// stamped with `now`, then a single step.
    pub fn frame<I>(&mut self, inputs: I, now: Instant) -> Vec<Cue>
        where I: IntoIterator<Item = Input> {
        let mut cues = vec![];
        for input in inputs {
            cues.extend(self.handle_input(input, now));
        }
        cues.extend(self.update());
        cues
    }

    /// Advances the snake one cell and resolves collision or food, once.
    /// Does nothing outside of play.
    pub fn update(&mut self) -> Vec<Cue> {
        if self.mode != Mode::Playing {
            return vec![];
        }

        self.snake.move_forward();

        if self.snake.check_collision() {
            self.mode = Mode::GameOver;
            log::info!("Game over at {:?} with a score of {}", self.snake.head(), self.score);
            vec![Cue::Play(Effect::Death), Cue::Music(Track::GameOver)]
        } else if self.snake.head() == self.food.position {
            self.score += SCORE_INCREMENT;
            self.fps = (self.fps + 1).min(MAX_FPS);
            self.snake.grow();
            self.food.generate_position(&mut self.rng);
            log::debug!(
                "Ate food, score {} at {} fps, next food at {:?}",
                self.score,
                self.fps,
                self.food.position
            );
            vec![Cue::Play(Effect::Eat)]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::components::{Direction, Position};

    fn session() -> (Session<StdRng>, Instant) {
        let now = Instant::now();
        (Session::new(StdRng::seed_from_u64(1), now), now)
    }

    fn playing() -> (Session<StdRng>, Instant) {
        let (mut session, now) = session();
        session.handle_input(Input::Other, now);
        // keep the food out of the snake's way unless a test places it
        session.food.position = Position::new(580, 580);
        (session, now)
    }

    #[test]
    fn starts_on_the_menu() {
        let (session, _) = session();

        assert_eq!(session.mode, Mode::StartMenu);
        assert_eq!(session.score, 0);
        assert_eq!(session.fps, 10);
    }

    #[test]
    fn any_key_starts_play() {
        for &input in [Input::Other, Input::Confirm, Input::Steer(Direction::Left)].iter() {
            let (mut session, now) = session();

            assert_eq!(session.handle_input(input, now), vec![Cue::Music(Track::Gameplay)]);
            assert_eq!(session.mode, Mode::Playing);
            assert_eq!(session.snake.direction, Direction::Right);
        }
    }

    #[test]
    fn menu_and_game_over_do_not_advance() {
        let (mut session, _) = session();
        let body = session.snake.body.clone();

        assert!(session.update().is_empty());
        assert_eq!(session.snake.body, body);

        session.mode = Mode::GameOver;
        assert!(session.update().is_empty());
        assert_eq!(session.snake.body, body);
    }

    #[test]
    fn step_without_food() {
        let (mut session, _) = playing();

        assert!(session.update().is_empty());
        assert_eq!(session.snake.head(), Position::new(120, 100));
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn eating_food() {
        let (mut session, _) = playing();
        session.food.position = Position::new(120, 100);

        assert_eq!(session.update(), vec![Cue::Play(Effect::Eat)]);
        assert_eq!(session.score, 10);
        assert_eq!(session.fps, 11);
        assert_eq!(session.snake.len(), 4);
        assert_eq!(session.mode, Mode::Playing);

        let food = session.food.position;
        assert!(food.is_within(WIDTH, HEIGHT));
        assert_eq!(food.x % CELL_SIZE, 0);
        assert_eq!(food.y % CELL_SIZE, 0);
    }

    #[test]
    fn fps_is_capped() {
        let (mut session, _) = playing();
        session.fps = 29;

        session.food.position = Position::new(120, 100);
        session.update();
        assert_eq!(session.fps, 30);

        session.food.position = Position::new(140, 100);
        session.update();
        assert_eq!(session.fps, 30);
        assert_eq!(session.score, 20);
        assert_eq!(session.snake.len(), 5);
    }

    #[test]
    fn leaving_the_board_ends_the_game() {
        let (mut session, _) = playing();
        session.snake.body = vec![Position::new(10, 100), Position::new(30, 100), Position::new(50, 100)];
        session.snake.direction = Direction::Left;

        assert_eq!(session.update(), vec![Cue::Play(Effect::Death), Cue::Music(Track::GameOver)]);
        assert_eq!(session.snake.head(), Position::new(-10, 100));
        assert!(session.snake.check_collision());
        assert_eq!(session.mode, Mode::GameOver);
    }

    #[test]
    fn collision_wins_over_food() {
        let (mut session, _) = playing();
        session.snake.body = vec![Position::new(580, 100), Position::new(560, 100)];
        session.food.position = Position::new(600, 100);

        session.update();

        assert_eq!(session.mode, Mode::GameOver);
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 2);
    }

    #[test]
    fn running_into_itself_ends_the_game() {
        let (mut session, _) = playing();
        session.snake.body = vec![
            Position::new(100, 100),
            Position::new(100, 120),
            Position::new(120, 120),
            Position::new(120, 100),
            Position::new(140, 100),
        ];
        session.snake.direction = Direction::Right;

        session.update();

        assert_eq!(session.mode, Mode::GameOver);
    }

    #[test]
    fn steering_while_playing() {
        let (mut session, now) = playing();

        assert!(session.handle_input(Input::Steer(Direction::Up), now + Duration::from_millis(100)).is_empty());
        assert_eq!(session.snake.direction, Direction::Up);

        // second press inside the cooldown is dropped
        session.handle_input(Input::Steer(Direction::Left), now + Duration::from_millis(140));
        assert_eq!(session.snake.direction, Direction::Up);

        session.update();
        assert_eq!(session.snake.head(), Position::new(100, 80));
    }

    #[test]
    fn two_turns_in_one_frame_cannot_reverse() {
        let (mut session, now) = playing();
        session.update();
        assert_eq!(session.snake.body, vec![Position::new(120, 100), Position::new(100, 100), Position::new(90, 100)]);

        let turns = vec![Input::Steer(Direction::Up), Input::Steer(Direction::Left)];
        assert!(session.frame(turns, now + Duration::from_millis(304)).is_empty());

        assert_eq!(session.snake.direction, Direction::Up);
        assert_eq!(session.snake.head(), Position::new(120, 80));
        assert_eq!(session.mode, Mode::Playing);
    }

    #[test]
    fn every_accepted_turn_is_followed_by_a_step() {
        let (mut session, now) = playing();
        session.update();

        session.frame(vec![Input::Steer(Direction::Up)], now + Duration::from_millis(200));
        assert_eq!(session.snake.head(), Position::new(120, 80));

        session.frame(vec![Input::Steer(Direction::Left)], now + Duration::from_millis(304));
        assert_eq!(session.snake.head(), Position::new(100, 80));
        assert_eq!(session.mode, Mode::Playing);
    }

    #[test]
    fn start_key_and_first_step_share_a_frame() {
        let (mut session, now) = session();
        session.food.position = Position::new(580, 580);

        assert_eq!(session.frame(vec![Input::Other], now), vec![Cue::Music(Track::Gameplay)]);
        assert_eq!(session.mode, Mode::Playing);
        assert_eq!(session.snake.head(), Position::new(120, 100));
    }

    #[test]
    fn game_over_waits_for_confirm() {
        let (mut session, now) = playing();
        session.mode = Mode::GameOver;

        assert!(session.handle_input(Input::Other, now).is_empty());
        assert!(session.handle_input(Input::Steer(Direction::Up), now).is_empty());
        assert_eq!(session.mode, Mode::GameOver);

        assert_eq!(session.handle_input(Input::Confirm, now), vec![Cue::Music(Track::Menu)]);
        assert_eq!(session.mode, Mode::StartMenu);
    }

    #[test]
    fn reset_then_play_restores_the_initial_session() {
        let (mut session, now) = playing();
        session.food.position = Position::new(120, 100);
        session.update();
        session.snake.direction = Direction::Down;
        for _ in 0..40 {
            session.update();
        }
        assert_eq!(session.mode, Mode::GameOver);

        let later = now + Duration::from_secs(5);
        session.handle_input(Input::Confirm, later);
        session.handle_input(Input::Other, later);

        assert_eq!(session.mode, Mode::Playing);
        assert_eq!(session.snake.body, vec![Position::new(100, 100), Position::new(90, 100), Position::new(80, 100)]);
        assert_eq!(session.snake.direction, Direction::Right);
        assert_eq!(session.score, 0);
        assert_eq!(session.fps, 10);
    }
}
