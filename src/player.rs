use enum_map::Enum;
use strum::EnumIter;

use crate::board::Mark;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    // Each identity is bound to one mark for the lifetime of the session.
    // No other mapping is valid.
    pub fn mark(self) -> Mark {
        match self {
            Player::One => Mark::Cross,
            Player::Two => Mark::Nought,
        }
    }
}
