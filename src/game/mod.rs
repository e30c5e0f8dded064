use log::{debug, error, info};
use num_integer::Integer;
use rand::Rng;

pub use stats::Stats;

use crate::basic::{Bounds, Frames, Point};
use crate::collision::{classify, Collision};
use crate::error::{Error, ErrorConversion, Result};
use crate::food::spawn_food;
use crate::hardware::{Input, Render};
use crate::prefs::Prefs;
use crate::snake::{Body, BodyError, Snake};

mod stats;

/// Everything that changes during a round
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
}

impl GameState {
    /// None if there is no room left for food
    pub fn spawn(snake: Snake, bounds: Bounds, attempts: usize, rng: &mut impl Rng) -> Option<Self> {
        let food = spawn_food(&snake.body, bounds, attempts, rng)?;
        Some(Self { snake, food })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Playing,
    /// Frozen until the confirm button is pressed
    Crashed { collision: Collision, at: Frames },
    /// The snake covers the whole interior, frozen until confirm
    BoardFull { at: Frames },
}

pub struct Game<R: Rng> {
    prefs: Prefs,
    bounds: Bounds,
    /// Template the snake is reset to on every restart
    initial_snake: Snake,

    state: GameState,
    status: Status,
    stats: Stats,

    frame: Frames,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(prefs: Prefs, mut rng: R) -> Result<Self> {
        let bounds = prefs.interior();
        let build = || -> std::result::Result<Snake, BodyError> {
            let body = Body::new(prefs.initial_body.clone())?;
            if let Some(outside) = body.points().iter().find(|point| !bounds.contains(**point)) {
                return Err(BodyError(
                    body.points().to_vec(),
                    if outside.x < bounds.min.x || outside.y < bounds.min.y {
                        "body starts above or left of the interior"
                    } else {
                        "body starts below or right of the interior"
                    },
                ));
            }
            Snake::new(body, prefs.initial_dir)
        };
        let initial_snake = build()
            .map_err(Error::from)
            .with_trace_step("Game::new")?;

        let state = GameState::spawn(initial_snake.clone(), bounds, prefs.spawn_attempts, &mut rng)
            .ok_or_else(|| BodyError(prefs.initial_body.clone(), "no room left for food"))
            .map_err(Error::from)
            .with_trace_step("Game::new")?;

        info!("new game, snake: {:?}, food: {:?}", state.snake.body.points(), state.food);

        Ok(Self {
            prefs,
            bounds,
            initial_snake,

            state,
            status: Status::Playing,
            stats: Stats::default(),

            frame: 0,
            rng,
        })
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Reset snake, food, growth and stats
    pub fn restart(&mut self) {
        let attempts = self.prefs.spawn_attempts;
        match GameState::spawn(self.initial_snake.clone(), self.bounds, attempts, &mut self.rng) {
            Some(state) => {
                info!("restart, food at {:?}", state.food);
                self.state = state;
                self.status = Status::Playing;
                self.stats = Stats::default();
            }
            None => error!("no room for food, can't restart"),
        }
    }

    /// One pass of the game loop, draws a full frame at the end,
    /// returns what the head ran into this tick (if anything)
    pub fn tick(&mut self, input: &mut impl Input, render: &mut impl Render) -> Option<Collision> {
        self.frame += 1;

        let collision = match self.status {
            Status::Playing => self.step(input),
            Status::Crashed { at, .. } => {
                self.wait_restart(input, at);
                None
            }
            Status::BoardFull { .. } => {
                let _ = input.direction_pressed();
                if input.confirm_pressed() {
                    self.restart();
                }
                None
            }
        };

        self.draw(render);
        collision
    }

    fn step(&mut self, input: &mut impl Input) -> Option<Collision> {
        if let Some(dir) = input.direction_pressed() {
            self.state.snake.turn(dir);
        }

        self.state.snake.advance();
        self.stats.ticks += 1;

        let collision = classify(&self.state.snake.body, self.state.food, self.bounds);
        match collision {
            Some(Collision::Food) => {
                debug!("ate food at {:?}", self.state.food);
                self.stats.food_eaten += 1;
                self.state.snake.grow = self.prefs.growth_bonus;
                let attempts = self.prefs.spawn_attempts;
                match spawn_food(&self.state.snake.body, self.bounds, attempts, &mut self.rng) {
                    Some(food) => self.state.food = food,
                    None => {
                        self.stats.final_len = self.state.snake.body.path_len();
                        info!(
                            "the snake fills the whole board, food eaten: {}, length: {}, ticks: {}",
                            self.stats.food_eaten, self.stats.final_len, self.stats.ticks,
                        );
                        self.status = Status::BoardFull { at: self.frame };
                    }
                }
            }
            Some(collision) if collision.is_fatal() => {
                self.stats.final_len = self.state.snake.body.path_len();
                info!(
                    "crashed ({:?}) at {:?}, food eaten: {}, length: {}, ticks: {}",
                    collision,
                    self.state.snake.head(),
                    self.stats.food_eaten,
                    self.stats.final_len,
                    self.stats.ticks,
                );
                self.status = Status::Crashed { collision, at: self.frame };
            }
            _ => {}
        }

        collision
    }

    fn wait_restart(&mut self, input: &mut impl Input, crashed_at: Frames) {
        // drain directions so they don't carry over into the next round
        let _ = input.direction_pressed();
        let confirm = input.confirm_pressed();
        if self.frame - crashed_at >= self.prefs.blink_duration() && confirm {
            self.restart();
        }
    }

    fn draw(&self, render: &mut impl Render) {
        render.clear();
        match self.status {
            Status::Playing => {
                render.draw_border();
                render.draw_food(self.state.food);
                render.draw_body(self.state.snake.body.points());
            }
            Status::Crashed { at, .. } => {
                let elapsed = self.frame - at;
                let phase = elapsed / self.prefs.blink_frames.max(1);
                let blinking_off = elapsed < self.prefs.blink_duration() && phase.is_odd();
                if !blinking_off {
                    render.draw_border();
                    render.draw_failure();
                    render.draw_body(self.state.snake.body.points());
                }
            }
            Status::BoardFull { .. } => {
                render.draw_border();
                render.draw_body(self.state.snake.body.points());
            }
        }
        render.present();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::basic::Dir;
    use crate::hardware::testing::{Call, RecordingRender, ScriptedInput};

    fn points(points: &[(isize, isize)]) -> Vec<Point> {
        points.iter().copied().map(Point::from).collect()
    }

    fn game(prefs: Prefs) -> Game<StdRng> {
        Game::new(prefs, StdRng::seed_from_u64(42)).expect("failed to create game")
    }

    fn snake_game(body: &[(isize, isize)], dir: Dir) -> Game<StdRng> {
        game(Prefs::default().initial_snake(points(body), dir))
    }

    #[test]
    fn first_tick() {
        let mut game = game(Prefs::default());
        let mut render = RecordingRender::default();
        assert!(!game.state().snake.body.covers(game.state().food));
        let food = Point::new(2, 2);
        game.state_mut().food = food;

        let collision = game.tick(&mut ScriptedInput::default(), &mut render);
        assert_eq!(collision, None);
        assert_eq!(render.frames_presented, 1);

        let body = game.state().snake.body.points();
        assert_eq!(body[0], Point::new(16, 5));
        assert_eq!(body[body.len() - 1], Point::new(19, 18));
        assert_eq!(
            render.frame,
            vec![
                Call::Clear,
                Call::Border,
                Call::Food(food),
                Call::Body(body.to_vec()),
                Call::Present
            ]
        );
    }

    #[test]
    fn wall() {
        let mut game = snake_game(&[(1, 5), (1, 1)], Dir::U);
        let collision = game.tick(&mut ScriptedInput::default(), &mut RecordingRender::default());
        assert_eq!(collision, Some(Collision::Wall));
        assert_eq!(game.state().snake.head(), Point::new(1, 0));
        assert!(matches!(game.status(), Status::Crashed { collision: Collision::Wall, .. }));
    }

    #[test]
    fn turn_records_corner() {
        let mut game = snake_game(&[(10, 15), (10, 10)], Dir::U);
        game.state_mut().food = Point::new(25, 25);
        let mut input = ScriptedInput::new([Some(Dir::R), Some(Dir::R), Some(Dir::R)]);
        let mut render = RecordingRender::default();

        game.tick(&mut input, &mut render);
        assert_eq!(
            game.state().snake.body.points(),
            points(&[(10, 14), (10, 10), (11, 10)]).as_slice()
        );

        // holding the same direction doesn't add more corners
        game.tick(&mut input, &mut render);
        game.tick(&mut input, &mut render);
        assert_eq!(
            game.state().snake.body.points(),
            points(&[(10, 12), (10, 10), (13, 10)]).as_slice()
        );
    }

    #[test]
    fn eat_and_grow() {
        let mut game = snake_game(&[(5, 25), (5, 22)], Dir::U);
        game.state_mut().food = Point::new(5, 21);
        let mut input = ScriptedInput::default();
        let mut render = RecordingRender::default();

        assert_eq!(game.tick(&mut input, &mut render), Some(Collision::Food));
        assert_eq!(game.state().snake.grow, 5);
        assert_eq!(game.stats().food_eaten, 1);
        assert_eq!(game.status(), Status::Playing);
        let food = game.state().food;
        assert_ne!(food, Point::new(5, 21));
        assert!(!game.state().snake.body.covers(food));

        let len = game.state().snake.body.path_len();
        let tail = game.state().snake.body.tail();
        for i in 1..=5 {
            game.state_mut().food = Point::new(20, 20);
            game.tick(&mut input, &mut render);
            assert_eq!(game.state().snake.body.tail(), tail);
            assert_eq!(game.state().snake.body.path_len(), len + i);
        }

        game.tick(&mut input, &mut render);
        assert_eq!(game.state().snake.grow, 0);
        assert_ne!(game.state().snake.body.tail(), tail);
        assert_eq!(game.state().snake.body.path_len(), len + 5);
    }

    #[test]
    fn self_collision() {
        let mut game = snake_game(&[(10, 10), (14, 10), (14, 12), (12, 12), (12, 11)], Dir::U);
        game.state_mut().food = Point::new(25, 25);
        let collision = game.tick(&mut ScriptedInput::default(), &mut RecordingRender::default());
        assert_eq!(collision, Some(Collision::Itself));
        assert_eq!(game.stats().final_len, 3 + 2 + 2 + 2);
    }

    #[test]
    fn restart_after_blinking() {
        let prefs = Prefs::default().initial_snake(points(&[(3, 5), (3, 1)]), Dir::U);
        let mut game = game(prefs);
        let mut input = ScriptedInput::default();
        let mut render = RecordingRender::default();

        assert_eq!(game.tick(&mut input, &mut render), Some(Collision::Wall));
        assert!(render.frame.contains(&Call::Failure));

        input.confirm = true;
        let mut blink_pattern = vec![];
        for _ in 1..game.prefs().blink_duration() {
            assert_eq!(game.tick(&mut input, &mut render), None);
            assert!(matches!(game.status(), Status::Crashed { .. }));
            blink_pattern.push(render.frame.contains(&Call::Failure));
        }
        assert_eq!(
            blink_pattern,
            [true, false, false, true, true, false, false, true, true, false, false]
        );

        game.tick(&mut input, &mut render);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.stats(), Stats::default());
        assert_eq!(game.state().snake.body.points(), points(&[(3, 5), (3, 1)]).as_slice());
        assert_eq!(game.state().snake.grow, 0);
        assert!(render.frame.iter().any(|call| matches!(call, Call::Food(_))));
    }

    #[test]
    fn steady_failure_until_confirm() {
        let prefs = Prefs::default()
            .initial_snake(points(&[(3, 5), (3, 1)]), Dir::U)
            .blinks(1, 1);
        let mut game = game(prefs);
        let mut input = ScriptedInput::default();
        let mut render = RecordingRender::default();

        game.tick(&mut input, &mut render);
        let frames = (0..10)
            .map(|_| {
                game.tick(&mut input, &mut render);
                render.frame.contains(&Call::Failure)
            })
            .collect_vec();
        assert_eq!(frames, [false, true, true, true, true, true, true, true, true, true]);
        assert!(matches!(game.status(), Status::Crashed { .. }));

        input.confirm = true;
        game.tick(&mut input, &mut render);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn filling_the_board_ends_the_round() {
        // 3x3 interior, one free cell left at (3, 3)
        let prefs = Prefs::default()
            .board(5, 1)
            .growth_bonus(2)
            .initial_snake(points(&[(1, 1), (3, 1), (3, 2), (1, 2), (1, 3), (2, 3)]), Dir::R);
        let mut game = game(prefs);
        assert_eq!(game.state().food, Point::new(3, 3));
        game.state_mut().snake.grow = 1;

        let mut input = ScriptedInput::default();
        let mut render = RecordingRender::default();
        assert_eq!(game.tick(&mut input, &mut render), Some(Collision::Food));
        assert!(matches!(game.status(), Status::BoardFull { .. }));
        assert_eq!(game.state().snake.grow, 2);
        assert_eq!(game.stats().final_len, 8);
        assert!(!render.frame.iter().any(|call| matches!(call, Call::Food(_))));

        // frozen, the snake doesn't move onto the eaten cell again
        let body = game.state().snake.body.clone();
        for _ in 0..5 {
            assert_eq!(game.tick(&mut input, &mut render), None);
        }
        assert_eq!(game.state().snake.body, body);
        assert_eq!(render.frames_presented, 6);

        input.confirm = true;
        game.tick(&mut input, &mut render);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.state().food, Point::new(3, 3));
    }

    #[test]
    fn invalid_initial_snake() {
        let rng = StdRng::seed_from_u64(0);
        let prefs = Prefs::default().initial_snake(points(&[(0, 5), (0, 1)]), Dir::U);
        assert!(Game::new(prefs, rng.clone()).is_err());

        let prefs = Prefs::default().initial_snake(points(&[(5, 5), (6, 6)]), Dir::U);
        assert!(Game::new(prefs, rng.clone()).is_err());

        let prefs = Prefs::default().initial_snake(points(&[(5, 5), (5, 1)]), Dir::D);
        assert!(Game::new(prefs, rng).is_err());
    }
}
