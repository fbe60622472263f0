use crate::Move;

/// The error type for [`Board::apply_move`](crate::Board::apply_move), i.e. for a single jump.
///
/// Every variant carries the rejected move, so a failure can be reproduced
/// against the board that rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The origin coordinate is outside the playable cross.
    NonexistentOrigin { mv: Move },
    /// There is no peg on the origin cell.
    UnoccupiedOrigin { mv: Move },
    /// The cell that would be jumped over holds no peg (or does not exist).
    NothingToJumpOver { mv: Move },
    /// The landing coordinate is outside the playable cross.
    NonexistentLanding { mv: Move },
    /// The landing cell is already occupied.
    OccupiedLanding { mv: Move },
}

impl IllegalMove {
    /// The move that was rejected.
    pub fn rejected_move(&self) -> Move {
        match *self {
            IllegalMove::NonexistentOrigin { mv }
            | IllegalMove::UnoccupiedOrigin { mv }
            | IllegalMove::NothingToJumpOver { mv }
            | IllegalMove::NonexistentLanding { mv }
            | IllegalMove::OccupiedLanding { mv } => mv,
        }
    }
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NonexistentOrigin { mv } => write!(
                f,
                "Tried to jump from ({}, {}), which is outside the playable cross",
                mv.x, mv.y
            ),
            IllegalMove::UnoccupiedOrigin { mv } => write!(
                f,
                "Tried to jump from ({}, {}), but there is no peg there",
                mv.x, mv.y
            ),
            IllegalMove::NothingToJumpOver { mv } => {
                let (mx, my) = mv.midpoint();
                write!(
                    f,
                    "Tried to jump {} from ({}, {}), but there is no peg at ({}, {}) to jump over",
                    mv.direction, mv.x, mv.y, mx, my
                )
            }
            IllegalMove::NonexistentLanding { mv } => {
                let (lx, ly) = mv.landing();
                write!(
                    f,
                    "Tried to jump {} from ({}, {}), but the landing cell ({}, {}) is outside the playable cross",
                    mv.direction, mv.x, mv.y, lx, ly
                )
            }
            IllegalMove::OccupiedLanding { mv } => {
                let (lx, ly) = mv.landing();
                write!(
                    f,
                    "Tried to jump {} from ({}, {}), but the landing cell ({}, {}) is already occupied",
                    mv.direction, mv.x, mv.y, lx, ly
                )
            }
        }
    }
}
