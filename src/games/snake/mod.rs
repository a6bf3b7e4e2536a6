//! Snake: steer a growing snake towards food on a square grid.
//!
//! The engine advances exactly one cell per `tick`; scheduling ticks at
//! `move_delay` intervals is the caller's job (see `runtime::run_snake`).
//! Wall behaviour is fixed per game by `WallPolicy`.

mod game;
mod position;

pub use game::{Snake, SnakeOutcome, SnakeState, POINTS_PER_FOOD};
pub use position::Position;
