//! Snake board state, advanced once per frame and steered by text commands.
//!
//! - grid: flat cell board and its index helpers
//! - direction: movement and the chat command vocabulary
//! - inbox: queue shared with whatever produces commands
//! - game: the per-tick state machine

pub mod direction;
pub mod game;
pub mod grid;
pub mod inbox;

pub use direction::Direction;
pub use game::{Game, MOVE_DELAY, RESET_DELAY};
pub use grid::{CELL_SIZE, Cell, FOOD_MARGIN, GRID_HEIGHT, GRID_WIDTH, Grid, SURFACE_SIZE};
pub use inbox::{MessageInbox, MessageSender, channel};
