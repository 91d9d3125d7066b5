//! Common types for Battleship: board errors, guess results and run status.

use alloc::string::String;
use core::fmt;

use crate::ship::ShipKind;

/// Result of a single guess against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Coordinates off the board, or a line that is not two integers.
    Illegal,
    /// First guess at an empty cell.
    Miss,
    /// Repeated guess at an empty cell.
    MissAgain,
    /// New hit on a ship that is still afloat.
    Hit,
    /// Repeated guess at a cell that was already hit.
    HitAgain,
    /// Guess sank a ship, other ships remain.
    Sunk(ShipKind),
    /// Guess sank the last surviving ship.
    AllSunk(ShipKind),
}

impl GuessResult {
    /// Returns `true` when this result ends the game.
    pub fn is_final(&self) -> bool {
        matches!(self, GuessResult::AllSunk(_))
    }

    /// Returns `true` if the guess registered a new hit.
    pub fn is_new_hit(&self) -> bool {
        matches!(
            self,
            GuessResult::Hit | GuessResult::Sunk(_) | GuessResult::AllSunk(_)
        )
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Illegal => write!(f, "illegal guess"),
            GuessResult::Miss => write!(f, "miss"),
            GuessResult::MissAgain => write!(f, "miss (again)"),
            GuessResult::Hit => write!(f, "hit"),
            GuessResult::HitAgain => write!(f, "hit (again)"),
            GuessResult::Sunk(kind) | GuessResult::AllSunk(kind) => write!(f, "{} sunk", kind),
        }
    }
}

/// Why a placement line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFault {
    /// Not five tokens, or a coordinate that is not an integer.
    Malformed,
    /// Kind token is not one of `A B S D P`.
    InvalidKind,
    /// A coordinate lies outside the board.
    OutOfBounds,
    /// Endpoints differ in both x and y.
    NotStraight,
    /// Segment length differs from the kind's size.
    WrongSize,
    /// A target cell already holds a ship.
    Overlap,
}

impl fmt::Display for PlacementFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PlacementFault::Malformed => "malformed ship placement",
            PlacementFault::InvalidKind => "invalid ship kind",
            PlacementFault::OutOfBounds => "ship out-of-bounds",
            PlacementFault::NotStraight => "ship not horizontal or vertical",
            PlacementFault::WrongSize => "incorrect ship size",
            PlacementFault::Overlap => "overlapping ship",
        };
        f.write_str(msg)
    }
}

/// Errors returned by Board operations. All of them are fatal to a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Kind letter not recognised.
    InvalidKind,
    /// Cell already holds a ship.
    Overlap,
    /// A placement line failed validation; carries the raw line.
    Placement { fault: PlacementFault, line: String },
    /// Fleet is not exactly one ship of each kind.
    FleetComposition,
}

impl BoardError {
    pub(crate) fn placement(fault: PlacementFault, line: &str) -> Self {
        BoardError::Placement {
            fault,
            line: String::from(line),
        }
    }

    /// The placement fault, if this error came from a placement line.
    pub fn fault(&self) -> Option<PlacementFault> {
        match self {
            BoardError::Placement { fault, .. } => Some(*fault),
            _ => None,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidKind => write!(f, "invalid ship kind"),
            BoardError::Overlap => write!(f, "cell already holds a ship"),
            BoardError::Placement { fault, line } => write!(f, "{}: {}", fault, line),
            BoardError::FleetComposition => write!(f, "fleet composition incorrect"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Where a run stands after feeding it input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Phase finished cleanly, more input may follow.
    Continue,
    /// A configuration error stopped the run.
    Fatal(BoardError),
    /// Every ship was sunk; remaining guesses were not read.
    Victory,
    /// All guesses were processed and ships remain.
    InputExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_error_display_includes_line() {
        let err = BoardError::placement(PlacementFault::WrongSize, "P 0 0 5 0");
        assert_eq!(err.to_string(), "incorrect ship size: P 0 0 5 0");
        assert_eq!(err.fault(), Some(PlacementFault::WrongSize));
    }

    #[test]
    fn sunk_results_share_display() {
        assert_eq!(GuessResult::Sunk(ShipKind::Destroyer).to_string(), "D sunk");
        assert_eq!(GuessResult::AllSunk(ShipKind::Destroyer).to_string(), "D sunk");
        assert!(GuessResult::AllSunk(ShipKind::Patrol).is_final());
        assert!(!GuessResult::HitAgain.is_new_hit());
    }
}
