use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i32 = 8;

/// The two sides of a game. Serializes as `"PlayerOne"` / `"PlayerTwo"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The row on which this player's checkers are promoted
    /// (the opponent's baseline).
    pub fn promotion_row(&self) -> i32 {
        match self {
            Player::PlayerOne => BOARD_SIZE - 1,
            Player::PlayerTwo => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A square can hold a checker iff it is in range and exactly one of
    /// its coordinates is even (the dark squares of the checkerboard).
    pub fn is_playable(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.x)
            && (0..BOARD_SIZE).contains(&self.y)
            && ((self.x % 2 == 0) != (self.y % 2 == 0))
    }

    /// The four diagonal step neighbors. No bounds check; callers must
    /// filter the results through `is_playable`.
    pub fn move_neighbors(&self) -> [Square; 4] {
        [
            Square::new(self.x - 1, self.y - 1),
            Square::new(self.x + 1, self.y - 1),
            Square::new(self.x - 1, self.y + 1),
            Square::new(self.x + 1, self.y + 1),
        ]
    }

    /// The four diagonal jump landing squares. No bounds check.
    pub fn jump_neighbors(&self) -> [Square; 4] {
        [
            Square::new(self.x - 2, self.y - 2),
            Square::new(self.x + 2, self.y - 2),
            Square::new(self.x - 2, self.y + 2),
            Square::new(self.x + 2, self.y + 2),
        ]
    }

    /// The square halfway between two squares a jump apart.
    pub fn midpoint(&self, other: Square) -> Square {
        Square::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckerId(pub u32);

/// A piece on the board. Constructed only by the board at placement time
/// and destroyed only by capture; the id tracks object continuity across
/// moves and plays no part in the rules.
#[derive(Debug, Clone, Copy)]
pub struct Checker {
    id: CheckerId,
    owner: Player,
    kinged: bool,
}

impl Checker {
    pub(crate) fn new(id: CheckerId, owner: Player) -> Self {
        Self {
            id,
            owner,
            kinged: false,
        }
    }

    pub fn id(&self) -> CheckerId {
        self.id
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn is_kinged(&self) -> bool {
        self.kinged
    }

    pub(crate) fn king(&mut self) {
        self.kinged = true;
    }
}

/// A requested move. Transient; never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub square: Square,
    pub checker_id: CheckerId,
}

/// Verdict of validating a single move. Defaults to invalid; the capture
/// payload is present only for a valid jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveValidation {
    pub valid: bool,
    pub capture: Option<Capture>,
}

impl MoveValidation {
    pub fn invalid() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareCode {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "player1-man")]
    PlayerOneMan,
    #[serde(rename = "player1-king")]
    PlayerOneKing,
    #[serde(rename = "player2-man")]
    PlayerTwoMan,
    #[serde(rename = "player2-king")]
    PlayerTwoKing,
}

/// Read-only projection of the game for external consumers.
/// `squares[y][x]`: x is the column, y is the row; row 0 is PlayerOne's
/// starting baseline, row 7 is PlayerTwo's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub is_player_ones_turn: bool,
    pub squares: Vec<Vec<SquareCode>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    pub success: bool,
    pub game_over: bool,
    pub can_jump_again: bool,
    pub message: String,
    pub board_state: BoardSnapshot,
}
