use enum_map::EnumMap;
use log::{info, trace};

use crate::channel::PeerChannel;
use crate::game::{Game, GameStatus};
use crate::player::Player;
use crate::protocol::{self, Command, ProtocolViolation, SessionError};


// Session lifecycle. There is no `AwaitingPlayers` representation here: a
// coordinator is only constructed once both peers are connected, and the
// phases below cover everything up to the channel teardown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionPhase {
    InProgress,
    Concluded { outcome: GameStatus, last_mover: Player },
    RestartNegotiation { first_voter: Player },
    Terminated,
}


// The authoritative side of the session. Owns both peer channels, enforces
// turn order, relays moves between the otherwise-unaware peers and decides
// whether another game is played. Only the channel of the identity whose
// input is expected is ever read, so the shared game state needs no locking.
pub struct Coordinator<C: PeerChannel> {
    channels: EnumMap<Player, C>,
    starting_player: Player,
}

impl<C: PeerChannel> Coordinator<C> {
    // Channels must be given in connection-accept order: the first-accepted
    // peer is `Player::One`.
    pub fn new(channels: EnumMap<Player, C>) -> Self {
        Coordinator { channels, starting_player: Player::One }
    }

    // Plays consecutive games until the peers stop agreeing to restart or a
    // channel fails. Both channels are closed on return.
    pub fn run(mut self) -> Result<(), SessionError> {
        let mut phase = SessionPhase::InProgress;
        while phase != SessionPhase::Terminated {
            phase = self.advance(phase)?;
        }
        info!("Session terminated");
        Ok(())
    }

    pub fn advance(&mut self, phase: SessionPhase) -> Result<SessionPhase, SessionError> {
        match phase {
            SessionPhase::InProgress => self.play_game(),
            SessionPhase::Concluded { outcome, last_mover } => {
                match outcome {
                    GameStatus::Victory(winner) => info!("Player {:?} won the game", winner),
                    GameStatus::Draw => info!("Game ended in a draw"),
                    GameStatus::Active => unreachable!("concluded phase with an active game"),
                }
                Ok(SessionPhase::RestartNegotiation { first_voter: last_mover })
            }
            SessionPhase::RestartNegotiation { first_voter } => {
                self.negotiate_restart(first_voter)
            }
            SessionPhase::Terminated => Ok(SessionPhase::Terminated),
        }
    }

    fn play_game(&mut self) -> Result<SessionPhase, SessionError> {
        // Identities are re-announced at the start of every game. They never
        // change within a session; only the starting order rotates.
        for (player, channel) in self.channels.iter_mut() {
            channel.send_line(protocol::encode_player(player))?;
        }
        let mut game = Game::new(self.starting_player);
        loop {
            let mover = game.active_player();
            let status = self.process_turn(&mut game)?;
            if status == GameStatus::Active {
                // The mover acknowledges a completed round before the turn
                // passes on.
                let line = self.recv_from(mover)?;
                if protocol::parse_command(&line)? != Command::Continue {
                    return Err(
                        ProtocolViolation { expected: "continue command", got: line }.into()
                    );
                }
            } else {
                return Ok(SessionPhase::Concluded { outcome: status, last_mover: mover });
            }
        }
    }

    // One round: announce the active identity to both peers, obtain the
    // mover's cell, apply it to the authoritative board and relay the line
    // verbatim to the other peer.
    fn process_turn(&mut self, game: &mut Game) -> Result<GameStatus, SessionError> {
        let mover = game.active_player();
        self.broadcast(protocol::encode_player(mover))?;
        trace!("Player {:?} is active", mover);

        info!("Waiting for player {:?} input", mover);
        let line = self.recv_from(mover)?;
        let cell = protocol::parse_cell(&line)?;
        info!("Received index {} from player {:?}", line, mover);

        // The peers validate their own moves locally, so a rejected move
        // here means the boards have diverged.
        let status = game.try_turn(mover, cell).map_err(|_| ProtocolViolation {
            expected: "move to an empty cell",
            got: line.clone(),
        })?;
        self.channels[mover.opponent()].send_line(&line)?;
        Ok(status)
    }

    // The peer that made the final move votes first. A quit vote terminates
    // the session immediately, without consulting the other peer; only
    // mutual agreement starts another game.
    fn negotiate_restart(&mut self, first_voter: Player) -> Result<SessionPhase, SessionError> {
        match self.recv_vote(first_voter)? {
            Command::Quit => Ok(SessionPhase::Terminated),
            _ => match self.recv_vote(first_voter.opponent())? {
                Command::Restart => {
                    trace!("Both players agreed to restart!");
                    // Whoever moved first in the previous game moves second
                    // in the next one.
                    self.starting_player = self.starting_player.opponent();
                    Ok(SessionPhase::InProgress)
                }
                _ => Ok(SessionPhase::Terminated),
            },
        }
    }

    fn recv_vote(&mut self, voter: Player) -> Result<Command, SessionError> {
        let line = self.recv_from(voter)?;
        match protocol::parse_command(&line)? {
            Command::Continue => {
                Err(ProtocolViolation { expected: "restart vote", got: line }.into())
            }
            vote => Ok(vote),
        }
    }

    fn recv_from(&mut self, player: Player) -> Result<String, SessionError> {
        Ok(self.channels[player].recv_line()?)
    }

    fn broadcast(&mut self, line: &str) -> Result<(), SessionError> {
        for (_, channel) in self.channels.iter_mut() {
            channel.send_line(line)?;
        }
        Ok(())
    }
}
