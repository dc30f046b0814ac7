//! Rules engine for English draughts (checkers).
//!
//! The engine owns the board and advances one game turn-by-turn: it
//! validates moves against the full rule set (diagonal movement, mandatory
//! capture, multi-jump chains, kinging, win and stalemate detection) and
//! exposes the position as a read-only snapshot. Transport, rendering, and
//! matchmaking are the caller's business.
//!
//! ```rust
//! use checkers_engine::{GameSession, Move, Player, Square};
//!
//! let mut session = GameSession::new();
//! let result = session.submit_move(&Move {
//!     player: Player::PlayerOne,
//!     from: Square::new(5, 2),
//!     to: Square::new(4, 3),
//! });
//! assert!(result.success);
//! assert!(!result.board_state.is_player_ones_turn);
//! ```

pub mod board;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod types;
pub mod validate;
pub mod win_detector;

pub use board::Board;
pub use game_state::{AppliedMove, GameState, TurnState};
pub use logger::init_logger;
pub use session::GameSession;
pub use types::{
    BoardSnapshot, Capture, Checker, CheckerId, Move, MoveResult, MoveValidation, Player, Square,
    SquareCode,
};
pub use validate::{has_jump_from, player_has_jump, validate_move};
pub use win_detector::is_game_over;
