use crate::game_state::{GameState, TurnState};
use crate::log;
use crate::types::{BOARD_SIZE, BoardSnapshot, Move, MoveResult, Player, Square, SquareCode};

/// One running game. Owned by the caller and passed explicitly into every
/// call; the engine keeps no ambient state. All operations are synchronous
/// and run to completion, so any concurrent access must be serialized by
/// the hosting layer.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Resets to the standard opening layout with PlayerOne to move.
    pub fn start_game(&mut self) {
        self.state = GameState::new();
        log!("game started");
    }

    /// Submits one move. Rejections (out of turn, invalid geometry, game
    /// already over) come back as `success: false` with a reason string;
    /// this never fails any other way.
    pub fn submit_move(&mut self, mv: &Move) -> MoveResult {
        match self.state.apply_move(mv) {
            Ok(applied) => {
                log!(
                    "{:?} moved ({}, {}) -> ({}, {}){}{}",
                    mv.player,
                    mv.from.x,
                    mv.from.y,
                    mv.to.x,
                    mv.to.y,
                    if applied.capture.is_some() {
                        ", capturing"
                    } else {
                        ""
                    },
                    if applied.game_over { ", game over" } else { "" },
                );
                MoveResult {
                    success: true,
                    game_over: applied.game_over,
                    can_jump_again: applied.can_jump_again,
                    message: if applied.can_jump_again {
                        "capture made, jump again".to_string()
                    } else {
                        "move accepted".to_string()
                    },
                    board_state: self.snapshot(),
                }
            }
            Err(reason) => {
                log!(
                    "{:?} move ({}, {}) -> ({}, {}) rejected: {}",
                    mv.player,
                    mv.from.x,
                    mv.from.y,
                    mv.to.x,
                    mv.to.y,
                    reason,
                );
                MoveResult {
                    success: false,
                    game_over: self.state.is_game_over(),
                    can_jump_again: false,
                    message: reason,
                    board_state: self.snapshot(),
                }
            }
        }
    }

    /// A read-only projection of the current position, `squares[y][x]`.
    pub fn snapshot(&self) -> BoardSnapshot {
        let squares = (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .map(|x| match self.state.board().get(Square::new(x, y)) {
                        None => SquareCode::Empty,
                        Some(checker) => match (checker.owner(), checker.is_kinged()) {
                            (Player::PlayerOne, false) => SquareCode::PlayerOneMan,
                            (Player::PlayerOne, true) => SquareCode::PlayerOneKing,
                            (Player::PlayerTwo, false) => SquareCode::PlayerTwoMan,
                            (Player::PlayerTwo, true) => SquareCode::PlayerTwoKing,
                        },
                    })
                    .collect()
            })
            .collect();

        BoardSnapshot {
            is_player_ones_turn: self.state.turn() == TurnState::Turn(Player::PlayerOne),
            squares,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
