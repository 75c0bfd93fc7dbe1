pub const BOARD_SIZE: u8 = 28;
pub const HALF_BOARD: u8 = BOARD_SIZE / 2;

pub const STARTING_HEALTH: f64 = 30.0;
