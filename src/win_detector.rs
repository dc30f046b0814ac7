use crate::board::Board;
use crate::types::{Move, Player};
use crate::validate::validate_move;

/// Decides whether the game ended with the move `last_mover` just made.
/// The check runs against the opponent, the player about to move next:
/// no checkers left, or no legal move from any checker (a logjam counts
/// as a loss for the immobilized player).
pub fn is_game_over(board: &Board, last_mover: Player) -> bool {
    let opponent = last_mover.opponent();
    let squares = board.squares_of(opponent);
    if squares.is_empty() {
        return true;
    }

    let has_move = squares.into_iter().any(|from| {
        from.move_neighbors()
            .into_iter()
            .chain(from.jump_neighbors())
            .any(|to| {
                validate_move(
                    board,
                    &Move {
                        player: opponent,
                        from,
                        to,
                    },
                )
                .valid
            })
    });

    !has_move
}
