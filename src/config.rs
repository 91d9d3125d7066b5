use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Aircraft,
    ShipKind::Battleship,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::Patrol,
];

/// Environment variable read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";

/// Returns `true` if `v` is a valid row or column index on the board.
pub fn in_bounds(v: i64) -> bool {
    (0..BOARD_SIZE as i64).contains(&v)
}
