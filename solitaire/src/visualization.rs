use crate::{Board, BOARD_SIZE};

/// Renders the board as text: a header row of column indices, then one row
/// per board row prefixed by its row index. A cell outside the cross is a
/// blank, an occupied cell is `o`, an empty hole is `.`.
///
/// The output is stable, so it can be diffed in golden tests.
pub fn render(board: &Board) -> String {
    let mut result = String::from("  ");
    for x in 0..BOARD_SIZE {
        result += &x.to_string();
    }
    for y in 0..BOARD_SIZE {
        result += &format!("\n{} ", y);
        for x in 0..BOARD_SIZE {
            let space = board.get(x, y).unwrap();
            result.push(if !space.exists {
                ' '
            } else if space.occupied {
                'o'
            } else {
                '.'
            });
        }
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Move};

    #[test]
    fn renders_the_starting_position() {
        let expected = [
            "  0123456",
            "0   ooo  ",
            "1   ooo  ",
            "2 ooooooo",
            "3 ooo.ooo",
            "4 ooooooo",
            "5   ooo  ",
            "6   ooo  ",
        ]
        .join("\n");
        assert_eq!(render(&Board::new()), expected);
    }

    #[test]
    fn renders_the_board_after_a_jump() {
        let mut board = Board::new();
        board
            .apply_move(Move {
                x: 3,
                y: 1,
                direction: Direction::Down,
            })
            .unwrap();
        let expected = [
            "  0123456",
            "0   ooo  ",
            "1   o.o  ",
            "2 ooo.ooo",
            "3 ooooooo",
            "4 ooooooo",
            "5   ooo  ",
            "6   ooo  ",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }
}
