use std::fmt;

use engine::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u8,
    pub y: u8
}

impl Point {
    pub fn new(x: u8, y: u8) -> Point {
        Point { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The bottom half of the board, rows 0 to 13, is ours. Everything the
    /// planner places has to land here; the engine flips the frame so that
    /// the local player is always the bottom player.
    pub fn on_own_half(&self) -> bool {
        self.in_bounds() && self.y < HALF_BOARD
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
