use rand::rngs::StdRng;

use crate::{Board, IllegalMove, Move, Strategy};

/// One game, from the starting position to a terminal board.
///
/// The session owns its board exclusively. Strategies only ever see it by
/// shared reference; [`Board::apply_move`] is invoked here and nowhere
/// else, so the turn counter and the board cannot drift apart.
pub struct Session {
    pub name: String,
    pub board: Board,
    pub turns: u32,
}

/// Summarizes a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Pegs left when no legal move remained. Lower is better.
    pub pieces_remaining: u32,
    pub turns: u32,
}

impl GameOutcome {
    pub fn is_win(&self) -> bool {
        self.pieces_remaining == 1
    }
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            turns: 0,
        }
    }

    /// Whether the game is over. Terminal is absorbing: no operation ever
    /// adds a peg back, so once the move list is empty it stays empty.
    pub fn is_terminal(&self) -> bool {
        self.board.legal_moves().is_empty()
    }

    /// Plays one turn: asks the strategy to pick from the current legal
    /// moves and applies its choice. Returns `Ok(None)` once the game is
    /// over, without consulting the strategy; strategies are never offered
    /// an empty candidate list.
    ///
    /// An [`IllegalMove`] means the strategy broke its contract by
    /// returning a move that was not among the candidates. It propagates
    /// to the caller; the session does not catch-and-continue.
    pub fn play_turn(
        &mut self,
        strategy: &mut dyn Strategy,
        rng: &mut StdRng,
    ) -> Result<Option<Move>, IllegalMove> {
        let moves = self.board.legal_moves();
        if moves.is_empty() {
            return Ok(None);
        }
        let mv = strategy.select(&self.board, &moves, rng);
        self.board.apply_move(mv)?;
        self.turns += 1;
        Ok(Some(mv))
    }

    /// Plays turns until no legal move remains.
    pub fn play_to_end(
        &mut self,
        strategy: &mut dyn Strategy,
        rng: &mut StdRng,
    ) -> Result<GameOutcome, IllegalMove> {
        while self.play_turn(strategy, rng)?.is_some() {}
        Ok(self.outcome())
    }

    /// The result as it stands right now. Authoritative once
    /// [`Self::is_terminal`] is true.
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            pieces_remaining: self.board.piece_count(),
            turns: self.turns,
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} turn {}:", self.name, self.turns)?;
        writeln!(f)?;
        writeln!(f, "{}", self.board)?;
        writeln!(f, "Pieces remaining: {}", self.board.piece_count())?;
        let moves = self.board.legal_moves();
        writeln!(f, "Possible moves ({}):", moves.len())?;
        for mv in moves {
            writeln!(f, "{}", mv)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{EdgeStrategy, RandomStrategy};

    #[test]
    fn fresh_session_is_not_terminal() {
        let session = Session::new("test");
        assert!(!session.is_terminal());
        assert_eq!(session.turns, 0);
        assert_eq!(session.outcome().pieces_remaining, 32);
    }

    #[test]
    fn play_turn_applies_exactly_one_move() {
        let mut session = Session::new("test");
        let mut rng = StdRng::seed_from_u64(0);
        let mv = session
            .play_turn(&mut RandomStrategy, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(session.turns, 1);
        assert_eq!(session.board.piece_count(), 31);
        // The applied move is stale on the new board.
        assert!(!session.board.is_legal(mv));
    }

    #[test]
    fn random_play_always_terminates() {
        for seed in 0..1000 {
            let mut session = Session::new("random");
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = session.play_to_end(&mut RandomStrategy, &mut rng).unwrap();
            assert!(outcome.pieces_remaining >= 1);
            assert!(session.is_terminal());
            assert_eq!(outcome.turns, 32 - outcome.pieces_remaining);
        }
    }

    #[test]
    fn edge_play_always_terminates() {
        for seed in 0..100 {
            let mut session = Session::new("edges");
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = session.play_to_end(&mut EdgeStrategy, &mut rng).unwrap();
            assert!(outcome.pieces_remaining >= 1);
            assert!(session.is_terminal());
        }
    }

    #[test]
    fn terminal_session_plays_no_further_turn() {
        let mut session = Session::new("test");
        let mut rng = StdRng::seed_from_u64(3);
        session.play_to_end(&mut RandomStrategy, &mut rng).unwrap();
        let turns_at_end = session.turns;
        assert_eq!(session.play_turn(&mut RandomStrategy, &mut rng).unwrap(), None);
        assert_eq!(session.turns, turns_at_end);
    }

    #[test]
    fn outcome_with_one_peg_is_a_win() {
        assert!(GameOutcome { pieces_remaining: 1, turns: 31 }.is_win());
        assert!(!GameOutcome { pieces_remaining: 2, turns: 30 }.is_win());
    }
}
