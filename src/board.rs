//! Game board state: the 10x10 grid, the ship registry and the fleet tally.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::num::IntErrorKind;

use crate::cell::Cell;
use crate::common::{BoardError, GuessResult, PlacementFault};
use crate::config::{in_bounds, BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Ship, ShipId, ShipKind};

const N: usize = BOARD_SIZE as usize;

/// A split but not yet validated placement line. The kind token stays raw
/// until the coordinate checks have passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement<'a> {
    kind: &'a str,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
}

/// Parse a coordinate. Integers too large for `i64` saturate so the bounds
/// check rejects them.
fn parse_coord(token: &str) -> Result<i64, PlacementFault> {
    token.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(PlacementFault::Malformed),
    })
}

impl<'a> Placement<'a> {
    fn parse(line: &'a str) -> Result<Self, PlacementFault> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(PlacementFault::Malformed);
        }
        let mut coords = [0i64; 4];
        for (slot, token) in coords.iter_mut().zip(&tokens[1..]) {
            *slot = parse_coord(token)?;
        }
        let [x1, y1, x2, y2] = coords;
        Ok(Self {
            kind: tokens[0],
            x1,
            y1,
            x2,
            y2,
        })
    }

    /// Check bounds, straightness, kind and length, in that order, and return
    /// the kind with the covered cells from the lower endpoint up.
    fn cells(&self) -> Result<(ShipKind, Vec<(usize, usize)>), PlacementFault> {
        let Placement {
            x1, y1, x2, y2, ..
        } = *self;
        if ![x1, y1, x2, y2].into_iter().all(in_bounds) {
            return Err(PlacementFault::OutOfBounds);
        }
        if x1 != x2 && y1 != y2 {
            return Err(PlacementFault::NotStraight);
        }
        let kind: ShipKind = self
            .kind
            .parse()
            .map_err(|_| PlacementFault::InvalidKind)?;
        let len = if x1 == x2 {
            (y1 - y2).unsigned_abs() + 1
        } else {
            (x1 - x2).unsigned_abs() + 1
        };
        if len as usize != kind.size() {
            return Err(PlacementFault::WrongSize);
        }
        // All four values are in bounds, so the casts cannot truncate.
        let cells = if x1 == x2 {
            let x = x1 as usize;
            (y1.min(y2) as usize..=y1.max(y2) as usize)
                .map(|y| (x, y))
                .collect()
        } else {
            let y = y1 as usize;
            (x1.min(x2) as usize..=x1.max(x2) as usize)
                .map(|x| (x, y))
                .collect()
        };
        Ok((kind, cells))
    }
}

/// Single-player board: placement, fleet check and guess resolution.
pub struct Board {
    grid: [[Cell; N]; N],
    ships: Vec<Ship>,
    surviving: BTreeSet<ShipKind>,
    placed: [usize; NUM_SHIPS],
}

impl Board {
    /// Create an empty board with all five kinds still afloat.
    pub fn new() -> Self {
        let grid = core::array::from_fn(|y| core::array::from_fn(|x| Cell::new(x, y)));
        Board {
            grid,
            ships: Vec::with_capacity(NUM_SHIPS),
            surviving: FLEET.iter().copied().collect(),
            placed: [0; NUM_SHIPS],
        }
    }

    /// Parse and place one `KIND x1 y1 x2 y2` line.
    ///
    /// Validation runs in a fixed order: shape of the line, bounds,
    /// straightness, kind letter, length, overlap. The board is left untouched
    /// when any check fails, and the error carries the raw line.
    pub fn place_ship(&mut self, line: &str) -> Result<ShipId, BoardError> {
        let placement =
            Placement::parse(line).map_err(|fault| BoardError::placement(fault, line))?;
        let (kind, cells) = placement
            .cells()
            .map_err(|fault| BoardError::placement(fault, line))?;
        if cells.iter().any(|&(x, y)| self.grid[y][x].ship().is_some()) {
            return Err(BoardError::placement(PlacementFault::Overlap, line));
        }

        let id = self.ships.len();
        let mut ship = Ship::new(kind);
        for &(x, y) in &cells {
            self.grid[y][x]
                .place_ship(id)
                .map_err(|_| BoardError::placement(PlacementFault::Overlap, line))?;
            ship.register_position(x, y);
        }
        log::debug!("placed {} at {:?}", kind.name(), ship.positions());
        self.ships.push(ship);
        self.placed[kind.index()] += 1;
        Ok(id)
    }

    /// Check that exactly one ship of every kind was placed.
    pub fn validate_fleet(&self) -> Result<(), BoardError> {
        if self.placed.iter().all(|&count| count == 1) {
            log::info!("fleet complete: {} ships", self.ships.len());
            Ok(())
        } else {
            log::debug!("fleet tally {:?}", self.placed);
            Err(BoardError::FleetComposition)
        }
    }

    /// Parse an `x y` line and resolve it. Lines that are not exactly two
    /// integers count as illegal guesses.
    pub fn apply_guess(&mut self, line: &str) -> GuessResult {
        let mut tokens = line.split_whitespace();
        let coords = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(x), Some(y), None) => x.parse::<i64>().ok().zip(y.parse::<i64>().ok()),
            _ => None,
        };
        match coords {
            Some((x, y)) => self.guess(x, y),
            None => {
                log::warn!("unparseable guess line {:?}", line);
                GuessResult::Illegal
            }
        }
    }

    /// Resolve a guess at `(x, y)`.
    pub fn guess(&mut self, x: i64, y: i64) -> GuessResult {
        if !in_bounds(x) || !in_bounds(y) {
            return GuessResult::Illegal;
        }
        let cell = &mut self.grid[y as usize][x as usize];
        if cell.is_hit() {
            return GuessResult::HitAgain;
        }
        let id = match cell.ship() {
            None if cell.is_guessed() => return GuessResult::MissAgain,
            None => {
                cell.mark_guessed();
                return GuessResult::Miss;
            }
            Some(_) if cell.is_guessed() => return GuessResult::HitAgain,
            Some(id) => id,
        };

        cell.mark_hit();
        let ship = &mut self.ships[id];
        if !ship.record_hit() {
            return GuessResult::Hit;
        }

        // Only the cell that sank the ship loses its link; the others keep
        // rendering the ship's letter.
        let kind = ship.kind();
        cell.clear_ship();
        self.surviving.remove(&kind);
        log::info!("{} sunk, {} remaining", kind.name(), self.surviving.len());
        if self.surviving.is_empty() {
            GuessResult::AllSunk(kind)
        } else {
            GuessResult::Sunk(kind)
        }
    }

    /// Board as ten rows of space separated glyphs, highest `y` first.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Cell at `(x, y)`, or `None` off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get(y).and_then(|row| row.get(x))
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// All placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Kinds that have not been sunk yet.
    pub fn surviving(&self) -> impl Iterator<Item = ShipKind> + '_ {
        self.surviving.iter().copied()
    }

    /// Number of ships of `kind` placed so far.
    pub fn placed_count(&self, kind: ShipKind) -> usize {
        self.placed[kind.index()]
    }

    /// Returns `true` once every kind has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.surviving.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().rev().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.glyph(&self.ships))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("surviving", &self.surviving)
            .field("placed", &self.placed)
            .finish()
    }
}
