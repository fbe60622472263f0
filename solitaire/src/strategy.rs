use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Board, Move, BOARD_SIZE};

/// A move-selection policy.
///
/// Given read access to the board and its current legal moves, a strategy
/// picks exactly one candidate to play next. The candidate list is never
/// empty: the session checks for the terminal state before asking. The RNG
/// is owned by the caller, so a batch of games is reproducible from its
/// seed.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Pick one of the given candidate moves.
    fn select(&mut self, board: &Board, moves: &[Move], rng: &mut StdRng) -> Move;
}

/// Draws uniformly from the candidate list.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&mut self, _board: &Board, moves: &[Move], rng: &mut StdRng) -> Move {
        *moves
            .choose(rng)
            .expect("select() called with no candidate moves")
    }
}

/// Prefers moves whose origin peg sits closest to the board's border,
/// clearing out the extremities first.
pub struct EdgeStrategy;

impl EdgeStrategy {
    /// Distance from the move's origin to the nearest of the four borders.
    fn edge_distance(mv: Move) -> i8 {
        let left = mv.x;
        let right = BOARD_SIZE - 1 - mv.x;
        let top = mv.y;
        let bottom = BOARD_SIZE - 1 - mv.y;
        left.min(right).min(top).min(bottom)
    }
}

impl Strategy for EdgeStrategy {
    fn name(&self) -> &'static str {
        "edges"
    }

    fn select(&mut self, _board: &Board, moves: &[Move], rng: &mut StdRng) -> Move {
        let mut top_choices: Vec<Move> = Vec::new();
        let mut best_distance = i8::MAX;
        for &mv in moves {
            let distance = Self::edge_distance(mv);
            match distance.cmp(&best_distance) {
                Ordering::Greater => {}
                Ordering::Equal => {
                    top_choices.push(mv);
                }
                Ordering::Less => {
                    top_choices = vec![mv];
                    best_distance = distance;
                }
            }
        }
        // Ties are broken uniformly with the caller's RNG.
        *top_choices
            .choose(rng)
            .expect("select() called with no candidate moves")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::Direction;

    fn mv(x: i8, y: i8, direction: Direction) -> Move {
        Move { x, y, direction }
    }

    #[test]
    fn random_selection_is_reproducible_from_the_seed() {
        let board = Board::new();
        let moves = board.legal_moves();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            RandomStrategy.select(&board, &moves, &mut rng)
        };
        assert_eq!(pick(7), pick(7));
    }

    #[test]
    fn random_selection_returns_a_candidate() {
        let board = Board::new();
        let moves = board.legal_moves();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let chosen = RandomStrategy.select(&board, &moves, &mut rng);
            assert!(moves.contains(&chosen));
        }
    }

    #[test]
    fn edge_distance_is_the_nearest_border() {
        assert_eq!(EdgeStrategy::edge_distance(mv(0, 3, Direction::Right)), 0);
        assert_eq!(EdgeStrategy::edge_distance(mv(6, 3, Direction::Left)), 0);
        assert_eq!(EdgeStrategy::edge_distance(mv(3, 1, Direction::Down)), 1);
        assert_eq!(EdgeStrategy::edge_distance(mv(3, 3, Direction::Up)), 3);
    }

    #[test]
    fn edge_strategy_prefers_the_outermost_origin() {
        let board = Board::new();
        let candidates = vec![
            mv(3, 3, Direction::Up),
            mv(2, 5, Direction::Left),
            mv(3, 2, Direction::Down),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        // (2, 5) is the unique candidate at distance 1; no tie to break.
        for _ in 0..20 {
            let chosen = EdgeStrategy.select(&board, &candidates, &mut rng);
            assert_eq!(chosen, mv(2, 5, Direction::Left));
        }
    }

    #[test]
    fn edge_strategy_breaks_ties_among_the_minima_only() {
        let board = Board::new();
        let tied = [mv(1, 3, Direction::Right), mv(5, 3, Direction::Left)];
        let candidates = vec![mv(3, 3, Direction::Up), tied[0], tied[1]];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let chosen = EdgeStrategy.select(&board, &candidates, &mut rng);
            assert!(tied.contains(&chosen));
        }
    }
}
