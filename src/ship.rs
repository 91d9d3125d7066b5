//! Ship classes and per-ship damage tracking.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// One of the five ship classes, identified on input by a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipKind {
    /// `A`, length 5.
    Aircraft,
    /// `B`, length 4.
    Battleship,
    /// `S`, length 3.
    Submarine,
    /// `D`, length 3.
    Destroyer,
    /// `P`, length 2.
    Patrol,
}

impl ShipKind {
    /// Look up a kind by its input letter.
    pub fn from_char(c: char) -> Result<Self, BoardError> {
        match c {
            'A' => Ok(ShipKind::Aircraft),
            'B' => Ok(ShipKind::Battleship),
            'S' => Ok(ShipKind::Submarine),
            'D' => Ok(ShipKind::Destroyer),
            'P' => Ok(ShipKind::Patrol),
            _ => Err(BoardError::InvalidKind),
        }
    }

    /// Letter used both on input and when rendering the board.
    pub const fn letter(self) -> char {
        match self {
            ShipKind::Aircraft => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
            ShipKind::Patrol => 'P',
        }
    }

    /// Number of cells a ship of this kind covers.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Aircraft => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::Patrol => 2,
        }
    }

    /// Long name, only used for logging.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Aircraft => "Aircraft carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Patrol => "Patrol boat",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            ShipKind::Aircraft => 0,
            ShipKind::Battleship => 1,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Patrol => 4,
        }
    }
}

impl FromStr for ShipKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ShipKind::from_char(c),
            _ => Err(BoardError::InvalidKind),
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Index of a ship in its board's registry.
pub type ShipId = usize;

/// A placed vessel. Stores the coordinates it covers, never the cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    hits: usize,
    positions: Vec<(usize, usize)>,
}

impl Ship {
    /// Create an undamaged ship with no registered positions.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            hits: 0,
            positions: Vec::with_capacity(kind.size()),
        }
    }

    /// Append a covered coordinate. Bounds are the caller's problem.
    pub fn register_position(&mut self, x: usize, y: usize) {
        self.positions.push((x, y));
    }

    /// Record one more hit and report whether the ship is now sunk.
    pub fn record_hit(&mut self) -> bool {
        if self.hits < self.size() {
            self.hits += 1;
        } else {
            log::debug!("{} hit after it was already sunk", self.kind.name());
        }
        self.is_sunk()
    }

    /// Check if every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.size()
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, hits: {}/{}, positions: {:?} }}",
            self.kind,
            self.hits,
            self.size(),
            self.positions,
        )
    }
}
