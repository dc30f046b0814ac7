use crate::board::Board;
use crate::types::{Capture, Move, MoveValidation, Player, Square};

/// Validates a single move against the board. Pure and total: any input,
/// including out-of-range coordinates, yields a verdict rather than a
/// panic. Checks short-circuit on the first failure and the default
/// verdict is invalid.
///
/// Turn order is not checked here; that is the game state's concern.
pub fn validate_move(board: &Board, mv: &Move) -> MoveValidation {
    if !mv.from.is_playable() || !mv.to.is_playable() {
        return MoveValidation::invalid();
    }
    let checker = match board.get(mv.from) {
        Some(checker) if checker.owner() == mv.player => *checker,
        _ => return MoveValidation::invalid(),
    };
    if board.get(mv.to).is_some() {
        return MoveValidation::invalid();
    }

    let dx = mv.to.x - mv.from.x;
    let dy = mv.to.y - mv.from.y;
    if dx == 0 || dy == 0 || dx.abs() != dy.abs() {
        return MoveValidation::invalid();
    }

    let mut capture = None;
    match dx.abs() {
        2 => {
            // A jump: the square in between must hold an opposing checker.
            // Both endpoints are playable and two apart, so the midpoint is
            // itself a playable square.
            let jumped_square = mv.from.midpoint(mv.to);
            match board.get(jumped_square) {
                Some(jumped) if jumped.owner() != mv.player => {
                    capture = Some(Capture {
                        square: jumped_square,
                        checker_id: jumped.id(),
                    });
                }
                _ => return MoveValidation::invalid(),
            }
        }
        1 => {
            // Forced capture: while any jump is available anywhere on the
            // board, plain moves are disallowed for this player.
            if player_has_jump(board, mv.player) {
                return MoveValidation::invalid();
            }
        }
        _ => return MoveValidation::invalid(),
    }

    if !checker.is_kinged() {
        let forward = match mv.player {
            Player::PlayerOne => dy > 0,
            Player::PlayerTwo => dy < 0,
        };
        if !forward {
            return MoveValidation::invalid();
        }
    }

    MoveValidation {
        valid: true,
        capture,
    }
}

/// True if `player` can capture with any checker anywhere on the board.
/// Every owned square is tested against its four jump landing squares
/// through `validate_move`, so direction and occupancy rules apply.
pub fn player_has_jump(board: &Board, player: Player) -> bool {
    board
        .squares_of(player)
        .into_iter()
        .any(|from| has_jump_from(board, player, from))
}

/// The same jump scan restricted to a single square; drives the
/// multi-jump chain rule after a capture.
pub fn has_jump_from(board: &Board, player: Player, from: Square) -> bool {
    from.jump_neighbors().into_iter().any(|to| {
        validate_move(board, &Move { player, from, to }).valid
    })
}
