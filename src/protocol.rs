use std::io;

use crate::board::CellIndex;
use crate::channel::ChannelError;
use crate::player::Player;


pub const MAX_PLAYERS: usize = 2;


// Everything a peer is allowed to say besides a move index:
//   - `Continue` acknowledges a completed non-terminal round,
//   - `Restart` / `Quit` are the votes of the restart negotiation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Continue,
    Restart,
    Quit,
}

impl Command {
    pub fn to_wire(self) -> &'static str {
        match self {
            Command::Continue => "c",
            Command::Restart => "r",
            Command::Quit => "q",
        }
    }
}


// A message arrived that does not fit the protocol state expecting it.
// Always fatal: the session cannot resynchronize and ends for both peers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProtocolViolation {
    pub expected: &'static str,
    pub got: String,
}

impl ProtocolViolation {
    fn new(expected: &'static str, got: &str) -> Self {
        ProtocolViolation { expected, got: got.to_owned() }
    }
}


pub fn encode_player(player: Player) -> &'static str {
    match player {
        Player::One => "1",
        Player::Two => "2",
    }
}

pub fn parse_player(line: &str) -> Result<Player, ProtocolViolation> {
    match line {
        "1" => Ok(Player::One),
        "2" => Ok(Player::Two),
        _ => Err(ProtocolViolation::new("player number", line)),
    }
}

pub fn encode_cell(cell: CellIndex) -> String { cell.to_zero_based().to_string() }

pub fn parse_cell(line: &str) -> Result<CellIndex, ProtocolViolation> {
    line.parse::<u8>()
        .ok()
        .and_then(CellIndex::from_zero_based)
        .ok_or_else(|| ProtocolViolation::new("cell index", line))
}

pub fn parse_command(line: &str) -> Result<Command, ProtocolViolation> {
    match line {
        "c" => Ok(Command::Continue),
        "r" => Ok(Command::Restart),
        "q" => Ok(Command::Quit),
        _ => Err(ProtocolViolation::new("command", line)),
    }
}


// Umbrella error for the coordinator and peer agent run loops. All channel
// failures during an active session are unrecoverable: the session ends,
// resources are released, nothing is retried.
#[derive(Debug)]
pub enum SessionError {
    Channel(ChannelError),
    Protocol(ProtocolViolation),
}

impl From<ChannelError> for SessionError {
    fn from(err: ChannelError) -> Self { SessionError::Channel(err) }
}

impl From<ProtocolViolation> for SessionError {
    fn from(err: ProtocolViolation) -> Self { SessionError::Protocol(err) }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self { SessionError::Channel(ChannelError::Io(err)) }
}
