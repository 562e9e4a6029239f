use std::io::{self, BufRead, Write};

use itertools::Itertools;
use log::error;
use tictactoe::board::{Board, CellIndex};
use tictactoe::client::{ClientState, ClientUi};
use tictactoe::game::GameStatus;
use tictactoe::player::Player;
use tictactoe::protocol;

use crate::network;
use crate::tui;


pub struct ClientConfig {
    pub hostname: String,
    pub port: u16,
}

// If a prompt answer consists of a single character, returns the character.
fn as_single_char(s: &str) -> Option<char> {
    s.chars().collect_tuple().map(|(single_char,)| single_char)
}

struct ConsoleUi;

impl ConsoleUi {
    fn prompt(&self, text: &str) -> io::Result<String> {
        print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim().to_owned())
    }
}

impl ClientUi for ConsoleUi {
    fn choose_cell(&mut self, _board: &Board, me: Player) -> io::Result<CellIndex> {
        loop {
            let answer = self.prompt(&format!(
                "P{}({}): ",
                protocol::encode_player(me),
                me.mark().to_char()
            ))?;
            // Cells are numbered 1-9 at the prompt and 0-8 on the wire.
            let cell = as_single_char(&answer)
                .and_then(|ch| ch.to_digit(10))
                .filter(|&digit| digit >= 1)
                .and_then(|digit| CellIndex::from_zero_based(digit as u8 - 1));
            match cell {
                Some(cell) => return Ok(cell),
                None => println!("Wrong input!"),
            }
        }
    }

    fn cell_rejected(&mut self, _cell: CellIndex) {
        println!("Field is already taken!");
    }

    fn board_updated(&mut self, board: &Board, _me: Player) {
        println!("\n{}", tui::render_board(board));
    }

    fn game_over(&mut self, board: &Board, outcome: GameStatus) {
        println!("\n{}", tui::render_board(board));
        match outcome {
            GameStatus::Victory(winner) => {
                println!("Player {} won the game", protocol::encode_player(winner));
            }
            GameStatus::Draw => println!("Draw"),
            GameStatus::Active => unreachable!("game over with an active game"),
        }
    }

    fn choose_restart(&mut self) -> io::Result<bool> {
        Ok(self.prompt("Restart [y/n]? ")? == "y")
    }
}

pub fn run(config: ClientConfig) -> io::Result<()> {
    let channel = network::connect(&config.hostname, config.port)?;
    if let Err(err) = ClientState::new(channel, ConsoleUi).run() {
        error!("Session aborted: {:?}", err);
    }
    Ok(())
}
