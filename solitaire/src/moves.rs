use serde::{Deserialize, Serialize};

/// One of the four axis directions a peg can jump in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The canonical direction order used when enumerating moves.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// The unit step along this direction, as an `(x, y)` offset.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// A candidate jump: the coordinate of the peg that moves, and the
/// direction it jumps in.
///
/// A `Move` carries no board reference and no proof of legality. A list of
/// moves generated from one board state is stale as soon as any move has
/// been applied, so legality must be re-checked against the board that
/// actually receives it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub x: i8,
    pub y: i8,
    pub direction: Direction,
}

impl Move {
    /// The cell the jumping peg passes over.
    pub fn midpoint(self) -> (i8, i8) {
        let (dx, dy) = self.direction.step();
        (self.x + dx, self.y + dy)
    }

    /// The cell the jumping peg lands on.
    pub fn landing(self) -> (i8, i8) {
        let (dx, dy) = self.direction.step();
        (self.x + 2 * dx, self.y + 2 * dy)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_landing_step_along_the_direction() {
        let mv = Move {
            x: 3,
            y: 1,
            direction: Direction::Down,
        };
        assert_eq!(mv.midpoint(), (3, 2));
        assert_eq!(mv.landing(), (3, 3));

        let mv = Move {
            x: 5,
            y: 3,
            direction: Direction::Left,
        };
        assert_eq!(mv.midpoint(), (4, 3));
        assert_eq!(mv.landing(), (3, 3));
    }

    #[test]
    fn display_formats() {
        let mv = Move {
            x: 1,
            y: 3,
            direction: Direction::Right,
        };
        assert_eq!(mv.to_string(), "(1, 3) right");
    }
}
