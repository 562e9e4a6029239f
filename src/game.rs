use crate::board::{Board, CellIndex, TurnError};
use crate::player::Player;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Active,
    Victory(Player),
    Draw,
}


// One game between the two fixed identities: a board plus the turn state.
// A session constructs a fresh `Game` for every game it plays; the peer
// channels outlive it.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl Game {
    pub fn new(starting_player: Player) -> Self {
        Game {
            board: Board::new(),
            active_player: starting_player,
            status: GameStatus::Active,
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn is_active(&self) -> bool { self.status == GameStatus::Active }

    // The identity currently permitted to move. Meaningless after the game
    // concluded; it then names whoever made the final move.
    pub fn active_player(&self) -> Player { self.active_player }

    pub fn player_is_active(&self, player: Player) -> bool {
        self.is_active() && self.active_player == player
    }

    // Applies a single move by `player`. On success the game either
    // concludes or the turn passes to the opponent: the same identity never
    // moves twice in a row.
    pub fn try_turn(&mut self, player: Player, cell: CellIndex) -> Result<GameStatus, TurnError> {
        if !self.is_active() {
            return Err(TurnError::GameOver);
        }
        if player != self.active_player {
            return Err(TurnError::WrongTurnOrder);
        }
        self.board.try_place_mark(cell, player.mark())?;
        if let Some(mark) = self.board.winner() {
            self.status = GameStatus::Victory(mark.player());
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.active_player = player.opponent();
        }
        Ok(self.status)
    }
}
