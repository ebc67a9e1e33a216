// game.rs - Fixed-tick snake state machine

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, trace, warn};

use crate::direction::Direction;
use crate::grid::{FOOD_MARGIN, Grid};
use crate::inbox::MessageInbox;

/// Minimum elapsed time between two snake steps.
pub const MOVE_DELAY: Duration = Duration::from_millis(40);
/// Time the game-over screen stays up before the board resets.
pub const RESET_DELAY: Duration = Duration::from_millis(5000);

pub struct Game {
    grid: Grid,
    head: usize,
    body: Vec<usize>, // oldest segment first
    direction: Direction,
    food: Option<usize>,
    game_over: bool,
    score: u32,

    move_timer: Duration,
    game_over_timer: Duration,

    inbox: MessageInbox,
    rng: StdRng,
}

impl Game {
    pub fn new(inbox: MessageInbox) -> Self {
        Self::with_rng(inbox, StdRng::from_entropy())
    }

    /// Deterministic food placement, for tests and replays.
    pub fn with_seed(inbox: MessageInbox, seed: u64) -> Self {
        Self::with_rng(inbox, StdRng::seed_from_u64(seed))
    }

    fn with_rng(inbox: MessageInbox, rng: StdRng) -> Self {
        let mut game = Self {
            grid: Grid::default(),
            head: 0,
            body: Vec::new(),
            direction: Direction::Up,
            food: None,
            game_over: false,
            score: 0,
            move_timer: Duration::ZERO,
            game_over_timer: Duration::ZERO,
            inbox,
            rng,
        };
        game.reset();
        game
    }

    pub fn start_index(&self) -> usize {
        self.grid.width() * self.grid.width() / 2
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.body.clear();
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.head = self.start_index();
        self.direction = Direction::Up;
        self.food = None;
        self.game_over = false;
        self.move_timer = Duration::ZERO;
        self.game_over_timer = Duration::ZERO;
        self.grid.materialize(self.head, self.food, &self.body);
    }

    /// One frame's worth of game logic. `elapsed` is the wall-clock time
    /// since the previous call.
    pub fn update(&mut self, elapsed: Duration) {
        if self.game_over {
            self.game_over_timer += elapsed;
            if self.game_over_timer > RESET_DELAY {
                info!(final_score = self.score, "restarting");
                self.reset();
            }
            return;
        }

        if let Some(message) = self.inbox.take_last() {
            match Direction::from_command(&message) {
                Some(direction) => {
                    debug!(?direction, "direction changed");
                    self.direction = direction;
                }
                None => trace!(%message, "ignoring message"),
            }
        }

        self.move_timer += elapsed;
        if self.move_timer > MOVE_DELAY {
            self.move_timer = Duration::ZERO;
            self.advance();
        }

        if self.food.is_none() {
            self.place_food();
        }

        self.grid.materialize(self.head, self.food, &self.body);
    }

    fn advance(&mut self) {
        let previous = self.head;
        self.head = self.direction.step(self.head, self.grid.width());

        self.body.push(previous);
        if Some(self.head) == self.food {
            self.food = None;
            self.score += 1;
            debug!(score = self.score, "food eaten");
        } else {
            self.body.remove(0);
        }

        // Self and wall collisions end the round the same way.
        if self.body.contains(&self.head) || self.grid.is_border(self.head) {
            self.game_over = true;
            info!(score = self.score, "game over");
        }
    }

    /// Picks uniformly among the free cells inside the food margin. Leaves
    /// food absent when there are none; the next tick tries again.
    fn place_food(&mut self) {
        let free: Vec<usize> = (0..self.grid.len())
            .filter(|&index| {
                self.grid.is_inside_margin(index, FOOD_MARGIN)
                    && index != self.head
                    && !self.body.contains(&index)
            })
            .collect();

        match free.choose(&mut self.rng) {
            Some(&index) => self.food = Some(index),
            None => warn!(body_len = self.body.len(), "no free cell left for food"),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn body(&self) -> &[usize] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<usize> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Time left before the automatic restart, while the round is over.
    pub fn restart_countdown(&self) -> Option<Duration> {
        self.game_over
            .then(|| RESET_DELAY.saturating_sub(self.game_over_timer))
    }

    /// Places the snake directly. `head` must not be on the border and
    /// `body.len()` becomes the score.
    #[doc(hidden)]
    pub fn debug_set_snake(&mut self, head: usize, body: &[usize], direction: Direction) {
        self.head = head;
        self.body = body.to_vec();
        self.score = body.len() as u32;
        self.direction = direction;
        self.grid.materialize(self.head, self.food, &self.body);
    }

    #[doc(hidden)]
    pub fn debug_set_food(&mut self, food: Option<usize>) {
        self.food = food;
        self.grid.materialize(self.head, self.food, &self.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbox;

    fn game() -> Game {
        let (_tx, inbox) = inbox::channel();
        Game::with_seed(inbox, 7)
    }

    #[test]
    fn reset_centres_the_head() {
        let game = game();
        assert_eq!(game.head(), 264);
        assert_eq!(game.grid().coords(game.head()), (11, 11));
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.food(), None);
        assert_eq!(game.score(), 0);
        assert!(game.body().is_empty());
        assert!(!game.is_game_over());
        assert_eq!(game.restart_countdown(), None);
    }

    #[test]
    fn move_timer_must_exceed_delay() {
        let mut game = game();
        game.update(MOVE_DELAY);
        assert_eq!(game.head(), 264);
        game.update(Duration::from_millis(1));
        assert_eq!(game.head(), 241);
    }

    #[test]
    fn move_timer_restarts_from_zero_after_step() {
        let mut game = game();
        game.update(Duration::from_millis(100));
        assert_eq!(game.head(), 241);
        // Leftover time is not carried over.
        game.update(Duration::from_millis(40));
        assert_eq!(game.head(), 241);
    }

    #[test]
    fn countdown_shrinks_while_game_over() {
        let mut game = game();
        game.debug_set_snake(game.grid().index(1, 5), &[], Direction::Left);
        game.update(Duration::from_millis(41));
        assert!(game.is_game_over());
        assert_eq!(game.restart_countdown(), Some(RESET_DELAY));

        game.update(Duration::from_millis(1500));
        assert_eq!(game.restart_countdown(), Some(Duration::from_millis(3500)));
    }
}
