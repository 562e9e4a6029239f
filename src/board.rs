use itertools::Itertools;
use strum::EnumIter;

use crate::player::Player;


pub const TOTAL_CELLS: usize = 9;

// All triples that win the game: 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum Mark {
    Cross,
    Nought,
}

impl Mark {
    pub fn player(self) -> Player {
        match self {
            Mark::Cross => Player::One,
            Mark::Nought => Player::Two,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => '0',
        }
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellIndex(u8);

impl CellIndex {
    pub fn from_zero_based(idx: u8) -> Option<CellIndex> {
        (usize::from(idx) < TOTAL_CELLS).then_some(CellIndex(idx))
    }

    pub fn to_zero_based(self) -> u8 { self.0 }

    pub fn all() -> impl Iterator<Item = CellIndex> { (0..TOTAL_CELLS as u8).map(CellIndex) }
}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnError {
    WrongTurnOrder,
    CellOccupied,
    GameOver,
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Option<Mark>; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self { Board { cells: [None; TOTAL_CELLS] } }

    pub fn get(&self, cell: CellIndex) -> Option<Mark> {
        self.cells[usize::from(cell.to_zero_based())]
    }

    // A cell is written at most once: placing onto an occupied cell is
    // rejected and leaves the board unchanged.
    pub fn try_place_mark(&mut self, cell: CellIndex, mark: Mark) -> Result<(), TurnError> {
        let slot = &mut self.cells[usize::from(cell.to_zero_based())];
        if slot.is_some() {
            return Err(TurnError::CellOccupied);
        }
        *slot = Some(mark);
        Ok(())
    }

    // At most one mark can have a complete line on a board reachable by
    // legal play, so the check order is irrelevant.
    pub fn winner(&self) -> Option<Mark> {
        WIN_LINES.iter().find_map(|line| {
            line.iter().map(|&idx| self.cells[idx]).all_equal_value().ok().flatten()
        })
    }

    pub fn is_full(&self) -> bool { self.cells.iter().all(|cell| cell.is_some()) }
}
