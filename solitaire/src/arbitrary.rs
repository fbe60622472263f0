use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Board, Direction, Move, ALL_DIRECTIONS, BOARD_SIZE};

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ALL_DIRECTIONS).unwrap()
    }
}

impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
        // Deliberately ranges past the grid on both sides, so that
        // validation gets exercised with out-of-bounds coordinates.
        fn coord(g: &mut Gen) -> i8 {
            (i8::arbitrary(g) % (BOARD_SIZE + 4)) - 2
        }
        Move {
            x: coord(g),
            y: coord(g),
            direction: Direction::arbitrary(g),
        }
    }
}

/// A board reachable from the starting position by some number of jumps.
#[derive(Clone, Debug)]
pub struct ReachableBoard {
    pub board: Board,
    pub moves_applied: u32,
}

impl Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let mut board = Board::new();
        let mut moves_applied = 0;
        let playout_len = usize::arbitrary(g) % 32;
        for _ in 0..playout_len {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.apply_move(mv).unwrap();
            moves_applied += 1;
        }
        Self {
            board,
            moves_applied,
        }
    }
}
