use rand::rngs::StdRng;
use solitaire::{GameOutcome, IllegalMove, Move, Session, Strategy};

/// The full record of one finished game.
pub struct PlayedGame {
    pub outcome: GameOutcome,
    pub moves: Vec<Move>,
}

/// Plays a single game to its terminal state.
///
/// Returns an error only if the strategy breaks its contract by selecting
/// a move that is not legal on the current board; the game is abandoned in
/// that case. Running out of moves is the normal end, not an error.
pub fn play_game(
    strategy: &mut dyn Strategy,
    rng: &mut StdRng,
    print_moves: bool,
) -> Result<PlayedGame, IllegalMove> {
    let mut session = Session::new(strategy.name());
    let mut moves = Vec::new();
    loop {
        if print_moves {
            println!("{}", session);
        }
        match session.play_turn(strategy, rng)? {
            Some(mv) => moves.push(mv),
            None => break,
        }
    }
    Ok(PlayedGame {
        outcome: session.outcome(),
        moves,
    })
}
