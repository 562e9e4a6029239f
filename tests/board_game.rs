use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;
use tictactoe::board::{Board, CellIndex, Mark, TurnError};
use tictactoe::game::{Game, GameStatus};
use tictactoe::player::Player;


fn cell(idx: u8) -> CellIndex { CellIndex::from_zero_based(idx).unwrap() }

// Replays moves in turn order, each one by whoever is active.
fn replay(game: &mut Game, cells: &[u8]) -> Result<GameStatus, TurnError> {
    let mut status = game.status();
    for &idx in cells {
        status = game.try_turn(game.active_player(), cell(idx))?;
    }
    Ok(status)
}

fn replay_from_start(cells: &[u8]) -> Result<GameStatus, TurnError> {
    replay(&mut Game::new(Player::One), cells)
}


#[test]
fn symbol_mapping_is_fixed() {
    for player in Player::iter() {
        assert_eq!(player.mark().player(), player);
    }
    assert_eq!(Player::One.mark(), Mark::Cross);
    assert_eq!(Player::Two.mark(), Mark::Nought);
    assert_eq!(Mark::Cross.to_char(), 'X');
    assert_eq!(Mark::Nought.to_char(), '0');
}

#[test]
fn cell_index_range() {
    assert!(CellIndex::from_zero_based(0).is_some());
    assert!(CellIndex::from_zero_based(8).is_some());
    assert!(CellIndex::from_zero_based(9).is_none());
    assert_eq!(CellIndex::all().count(), 9);
}

#[test]
fn cells_are_written_at_most_once() {
    let mut board = Board::new();
    board.try_place_mark(cell(4), Mark::Cross).unwrap();
    assert_eq!(
        board.try_place_mark(cell(4), Mark::Nought).unwrap_err(),
        TurnError::CellOccupied
    );
    assert_eq!(board.get(cell(4)), Some(Mark::Cross));
}

#[test]
fn win_detection() {
    // Top row for the starting player.
    assert_eq!(replay_from_start(&[0, 3, 1, 4, 2]).unwrap(), GameStatus::Victory(Player::One));
    // Middle column.
    assert_eq!(replay_from_start(&[1, 0, 4, 3, 7]).unwrap(), GameStatus::Victory(Player::One));
    // Main diagonal.
    assert_eq!(replay_from_start(&[4, 1, 0, 2, 8]).unwrap(), GameStatus::Victory(Player::One));
    // Middle row for the second player.
    assert_eq!(
        replay_from_start(&[0, 4, 1, 5, 6, 3]).unwrap(),
        GameStatus::Victory(Player::Two)
    );
}

#[test]
fn fastest_win_takes_five_moves() {
    let mut game = Game::new(Player::One);
    assert_eq!(replay(&mut game, &[0, 3, 1, 4, 2]).unwrap(), GameStatus::Victory(Player::One));
    assert!(!game.board().is_full());
    assert_eq!(game.board().winner(), Some(Mark::Cross));
}

#[test]
fn draw_fills_the_board_in_nine_moves() {
    let mut game = Game::new(Player::One);
    assert_eq!(replay(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap(), GameStatus::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.board().winner(), None);
}

#[test]
fn turn_state_alternates_after_every_move() {
    let mut game = Game::new(Player::One);
    for (turn, &idx) in [0u8, 3, 1, 4].iter().enumerate() {
        let mover = game.active_player();
        game.try_turn(mover, cell(idx)).unwrap();
        assert_eq!(game.active_player(), mover.opponent(), "after turn {}", turn);
    }
}

#[test]
fn moves_out_of_turn_are_rejected() {
    let mut game = Game::new(Player::One);
    assert_eq!(game.try_turn(Player::Two, cell(0)).unwrap_err(), TurnError::WrongTurnOrder);
    // The rejection must not have touched the board or the turn state.
    assert_eq!(game.board().get(cell(0)), None);
    assert_eq!(game.active_player(), Player::One);
}

#[test]
fn concluded_game_rejects_further_moves() {
    let mut game = Game::new(Player::One);
    replay(&mut game, &[0, 3, 1, 4, 2]).unwrap();
    assert_eq!(
        game.try_turn(game.active_player(), cell(8)).unwrap_err(),
        TurnError::GameOver
    );
}

#[test]
fn occupied_cell_leaves_turn_state_unchanged() {
    let mut game = Game::new(Player::One);
    game.try_turn(Player::One, cell(0)).unwrap();
    assert_eq!(game.try_turn(Player::Two, cell(0)).unwrap_err(), TurnError::CellOccupied);
    assert_eq!(game.active_player(), Player::Two);
    assert!(game.is_active());
}

#[test]
fn second_player_can_start_a_game() {
    // After a restart the starting order rotates; the game itself must not
    // assume who moves first.
    let mut game = Game::new(Player::Two);
    assert_eq!(replay(&mut game, &[0, 3, 1, 4, 2]).unwrap(), GameStatus::Victory(Player::Two));
}
