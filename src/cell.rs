//! A single board coordinate.

use crate::common::BoardError;
use crate::ship::{Ship, ShipId};

/// Glyph rendered for a cell with no ship.
pub const EMPTY_GLYPH: char = '.';

/// One square of the grid. The ship link is an index into the board's
/// registry, so cells never own ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    ship: Option<ShipId>,
    guessed: bool,
    hit: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            ship: None,
            guessed: false,
            hit: false,
        }
    }

    /// `(x, y)` of this cell.
    pub fn coord(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Occupy the cell. Fails if another ship is already here.
    pub fn place_ship(&mut self, ship: ShipId) -> Result<(), BoardError> {
        if self.ship.is_some() {
            return Err(BoardError::Overlap);
        }
        self.ship = Some(ship);
        Ok(())
    }

    /// Drop the ship link. Only done when that ship sinks.
    pub fn clear_ship(&mut self) {
        self.ship = None;
    }

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn mark_guessed(&mut self) {
        self.guessed = true;
    }

    /// Mark as hit, which also marks it guessed.
    pub fn mark_hit(&mut self) {
        self.guessed = true;
        self.hit = true;
    }

    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Display character: the occupying ship's letter, or `.`.
    /// Hits are not marked.
    pub fn glyph(&self, ships: &[Ship]) -> char {
        self.ship
            .and_then(|id| ships.get(id))
            .map_or(EMPTY_GLYPH, |ship| ship.kind().letter())
    }
}
