use crate::board::Board;
use crate::types::{Capture, Move, Player};
use crate::validate::{has_jump_from, validate_move};
use crate::win_detector::is_game_over;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Turn(Player),
    GameOver,
}

/// What happened when a move was applied successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub capture: Option<Capture>,
    pub can_jump_again: bool,
    pub game_over: bool,
}

/// The mutable state of one game: the board plus whose turn it is.
/// Everything the engine remembers between calls lives here.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: TurnState,
}

impl GameState {
    /// A fresh game: standard opening layout, PlayerOne to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            turn: TurnState::Turn(Player::PlayerOne),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.turn == TurnState::GameOver
    }

    #[cfg(test)]
    pub fn from_parts(board: Board, turn: TurnState) -> Self {
        Self { board, turn }
    }

    /// Validates and applies one move. The board mutation, capture
    /// removal, and promotion happen together or not at all; a rejected
    /// move leaves the state untouched and never advances the turn.
    pub fn apply_move(&mut self, mv: &Move) -> Result<AppliedMove, String> {
        match self.turn {
            TurnState::GameOver => return Err("game is already over".to_string()),
            TurnState::Turn(player) if player != mv.player => {
                return Err("not your turn".to_string());
            }
            TurnState::Turn(_) => {}
        }

        let validation = validate_move(&self.board, mv);
        if !validation.valid {
            return Err("invalid move".to_string());
        }

        self.board.relocate(mv.from, mv.to);
        if let Some(capture) = validation.capture {
            self.board.remove(capture.square);
        }
        let already_kinged = self
            .board
            .get(mv.to)
            .is_some_and(|checker| checker.is_kinged());
        if mv.to.y == mv.player.promotion_row() && !already_kinged {
            self.board.promote(mv.to);
        }

        let game_over = is_game_over(&self.board, mv.player);
        // The chain check runs after promotion, so a checker kinged
        // mid-move may continue with its new range of jumps.
        let can_jump_again = !game_over
            && validation.capture.is_some()
            && has_jump_from(&self.board, mv.player, mv.to);

        self.turn = if game_over {
            TurnState::GameOver
        } else if can_jump_again {
            TurnState::Turn(mv.player)
        } else {
            TurnState::Turn(mv.player.opponent())
        };

        Ok(AppliedMove {
            capture: validation.capture,
            can_jump_again,
            game_over,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player::{PlayerOne, PlayerTwo};
    use crate::types::Square;

    fn mv(player: Player, from: (i32, i32), to: (i32, i32)) -> Move {
        Move {
            player,
            from: Square::new(from.0, from.1),
            to: Square::new(to.0, to.1),
        }
    }

    #[test]
    fn test_player_one_moves_first() {
        let mut state = GameState::new();
        assert!(state.apply_move(&mv(PlayerTwo, (2, 5), (3, 4))).is_err());
        assert!(state.apply_move(&mv(PlayerOne, (5, 2), (4, 3))).is_ok());
    }

    #[test]
    fn test_turn_alternates_after_a_plain_move() {
        let mut state = GameState::new();
        state.apply_move(&mv(PlayerOne, (5, 2), (4, 3))).unwrap();
        assert_eq!(state.turn(), TurnState::Turn(PlayerTwo));
        assert!(state.apply_move(&mv(PlayerOne, (4, 3), (3, 4))).is_err());
        assert!(state.apply_move(&mv(PlayerTwo, (2, 5), (3, 4))).is_ok());
        assert_eq!(state.turn(), TurnState::Turn(PlayerOne));
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = GameState::new();
        assert!(state.apply_move(&mv(PlayerOne, (5, 2), (5, 3))).is_err());
        assert_eq!(state.turn(), TurnState::Turn(PlayerOne));
        assert!(state.board().get(Square::new(5, 2)).is_some());
    }

    #[test]
    fn test_checker_identity_survives_a_move() {
        let mut state = GameState::new();
        let id = state.board().get(Square::new(5, 2)).unwrap().id();
        state.apply_move(&mv(PlayerOne, (5, 2), (4, 3))).unwrap();
        assert_eq!(state.board().get(Square::new(4, 3)).unwrap().id(), id);
        assert!(state.board().get(Square::new(5, 2)).is_none());
    }

    #[test]
    fn test_capture_removes_the_jumped_checker() {
        let mut board = Board::new();
        board.place(Square::new(5, 2), PlayerOne);
        board.place(Square::new(4, 3), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerOne));

        let applied = state.apply_move(&mv(PlayerOne, (5, 2), (3, 4))).unwrap();
        assert!(applied.capture.is_some());
        assert!(state.board().get(Square::new(4, 3)).is_none());
        assert!(state.board().get(Square::new(3, 4)).is_some());
    }

    #[test]
    fn test_player_one_is_kinged_on_row_seven_only() {
        let mut board = Board::new();
        board.place(Square::new(1, 6), PlayerOne);
        board.place(Square::new(3, 2), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerOne));

        state.apply_move(&mv(PlayerOne, (1, 6), (0, 7))).unwrap();
        assert!(state.board().get(Square::new(0, 7)).unwrap().is_kinged());
    }

    #[test]
    fn test_player_two_is_kinged_on_row_zero() {
        let mut board = Board::new();
        board.place(Square::new(3, 2), PlayerOne);
        board.place(Square::new(6, 1), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerTwo));

        state.apply_move(&mv(PlayerTwo, (6, 1), (7, 0))).unwrap();
        assert!(state.board().get(Square::new(7, 0)).unwrap().is_kinged());
    }

    #[test]
    fn test_no_promotion_short_of_the_far_row() {
        let mut state = GameState::new();
        state.apply_move(&mv(PlayerOne, (5, 2), (4, 3))).unwrap();
        assert!(!state.board().get(Square::new(4, 3)).unwrap().is_kinged());
    }

    #[test]
    fn test_double_jump_keeps_the_turn_then_passes_it() {
        let mut board = Board::new();
        board.place(Square::new(5, 2), PlayerOne);
        board.place(Square::new(4, 3), PlayerTwo);
        board.place(Square::new(4, 5), PlayerTwo);
        board.place(Square::new(0, 1), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerOne));

        let first = state.apply_move(&mv(PlayerOne, (5, 2), (3, 4))).unwrap();
        assert!(first.can_jump_again);
        assert_eq!(state.turn(), TurnState::Turn(PlayerOne));

        let second = state.apply_move(&mv(PlayerOne, (3, 4), (5, 6))).unwrap();
        assert!(!second.can_jump_again);
        assert_eq!(state.turn(), TurnState::Turn(PlayerTwo));
    }

    #[test]
    fn test_chain_is_restricted_to_the_landing_checker() {
        // A second jump exists for a different checker, but the landing
        // checker itself is done, so the turn passes.
        let mut board = Board::new();
        board.place(Square::new(5, 2), PlayerOne);
        board.place(Square::new(0, 1), PlayerOne);
        board.place(Square::new(4, 3), PlayerTwo);
        board.place(Square::new(1, 2), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerOne));

        let applied = state.apply_move(&mv(PlayerOne, (5, 2), (3, 4))).unwrap();
        assert!(!applied.can_jump_again);
        assert_eq!(state.turn(), TurnState::Turn(PlayerTwo));
    }

    #[test]
    fn test_capturing_the_last_checker_ends_the_game() {
        let mut board = Board::new();
        board.place(Square::new(5, 2), PlayerOne);
        board.place(Square::new(4, 3), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerOne));

        let applied = state.apply_move(&mv(PlayerOne, (5, 2), (3, 4))).unwrap();
        assert!(applied.game_over);
        assert!(!applied.can_jump_again);
        assert_eq!(state.turn(), TurnState::GameOver);
    }

    #[test]
    fn test_no_moves_are_accepted_after_game_over() {
        let mut board = Board::new();
        board.place(Square::new(5, 2), PlayerOne);
        board.place(Square::new(4, 3), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerOne));
        state.apply_move(&mv(PlayerOne, (5, 2), (3, 4))).unwrap();

        let err = state.apply_move(&mv(PlayerTwo, (3, 4), (2, 5)));
        assert!(err.is_err());
        let err = state.apply_move(&mv(PlayerOne, (3, 4), (2, 5)));
        assert!(err.is_err());
    }

    #[test]
    fn test_immobilizing_the_opponent_ends_the_game() {
        // PlayerTwo steps into place, leaving PlayerOne's lone man wedged
        // in the corner with no step and no jump.
        let mut board = Board::new();
        board.place(Square::new(0, 7), PlayerOne);
        board.place(Square::new(1, 6), PlayerTwo);
        board.place(Square::new(3, 6), PlayerTwo);
        let mut state = GameState::from_parts(board, TurnState::Turn(PlayerTwo));

        let applied = state.apply_move(&mv(PlayerTwo, (3, 6), (2, 5))).unwrap();
        assert!(applied.game_over);
        assert_eq!(state.turn(), TurnState::GameOver);
    }
}
