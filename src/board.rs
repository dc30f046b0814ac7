use crate::types::{BOARD_SIZE, Checker, CheckerId, Player, Square};

/// The 8x8 grid of occupancy. Owns every checker on it: checkers are
/// created here at placement and destroyed when removed. Only playable
/// squares are ever occupied.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Option<Checker>; 8]; 8],
    next_id: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; 8]; 8],
            next_id: 0,
        }
    }

    /// The standard opening layout: PlayerOne men on the playable squares
    /// of rows 0-2, PlayerTwo on rows 5-7.
    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for y in 0..3 {
            for x in 0..BOARD_SIZE {
                board.place(Square::new(x, y), Player::PlayerOne);
            }
        }
        for y in (BOARD_SIZE - 3)..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                board.place(Square::new(x, y), Player::PlayerTwo);
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<&Checker> {
        if !square.is_playable() {
            return None;
        }
        self.cells[square.x as usize][square.y as usize].as_ref()
    }

    /// Places a new checker for `owner`. Returns `None` without touching
    /// the board if the square is non-playable or occupied.
    pub fn place(&mut self, square: Square, owner: Player) -> Option<CheckerId> {
        if !square.is_playable() || self.get(square).is_some() {
            return None;
        }
        let id = CheckerId(self.next_id);
        self.next_id += 1;
        self.cells[square.x as usize][square.y as usize] = Some(Checker::new(id, owner));
        Some(id)
    }

    /// Sets the king flag on the checker at `square`, if there is one.
    pub fn promote(&mut self, square: Square) -> bool {
        if !square.is_playable() {
            return false;
        }
        match self.cells[square.x as usize][square.y as usize].as_mut() {
            Some(checker) => {
                checker.king();
                true
            }
            None => false,
        }
    }

    /// Removes and returns the checker at `square`. Dropping the returned
    /// value destroys the checker; this is the only way a checker leaves
    /// the game.
    pub fn remove(&mut self, square: Square) -> Option<Checker> {
        if !square.is_playable() {
            return None;
        }
        self.cells[square.x as usize][square.y as usize].take()
    }

    /// Moves the checker at `from` to the empty playable square `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> bool {
        if !from.is_playable() || !to.is_playable() || self.get(to).is_some() {
            return false;
        }
        match self.cells[from.x as usize][from.y as usize].take() {
            Some(checker) => {
                self.cells[to.x as usize][to.y as usize] = Some(checker);
                true
            }
            None => false,
        }
    }

    pub fn squares_of(&self, player: Player) -> Vec<Square> {
        let mut squares = Vec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let square = Square::new(x, y);
                if let Some(checker) = self.get(square)
                    && checker.owner() == player
                {
                    squares.push(square);
                }
            }
        }
        squares
    }

    pub fn count(&self, player: Player) -> usize {
        self.squares_of(player).len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
