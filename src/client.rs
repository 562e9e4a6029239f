use std::io;

use log::{debug, info};

use crate::board::{Board, CellIndex, TurnError};
use crate::channel::{ChannelError, PeerChannel};
use crate::game::{Game, GameStatus};
use crate::player::Player;
use crate::protocol::{self, Command, ProtocolViolation, SessionError};


// Everything the peer agent needs from the local frontend. The agent calls
// back into this while it holds the turn; the frontend never talks to the
// coordinator directly.
pub trait ClientUi {
    // Asks for a move on the caller's board replica. Range checking is the
    // frontend's problem (a `CellIndex` is in range by construction);
    // occupied cells are rejected by the agent, which then asks again.
    fn choose_cell(&mut self, board: &Board, me: Player) -> io::Result<CellIndex>;

    // The chosen cell was already occupied. A retry follows; nothing is
    // sent to the coordinator in between.
    fn cell_rejected(&mut self, cell: CellIndex);

    // Called before every turn with the up-to-date replica.
    fn board_updated(&mut self, board: &Board, me: Player);

    fn game_over(&mut self, board: &Board, outcome: GameStatus);

    // The restart vote: true to play another game, false to quit.
    fn choose_restart(&mut self) -> io::Result<bool>;
}


// The participant side of the session. Keeps a board replica that is
// updated only from coordinator messages: the announced active identity and
// the relayed move indices. Local input never touches the replica until the
// agent itself holds the turn.
pub struct ClientState<C: PeerChannel, U: ClientUi> {
    channel: C,
    ui: U,
}

impl<C: PeerChannel, U: ClientUi> ClientState<C, U> {
    pub fn new(channel: C, ui: U) -> Self { ClientState { channel, ui } }

    // Plays games until the session ends. `Ok(())` means a normal end (a
    // quit vote on either side); any channel or protocol failure is fatal.
    pub fn run(mut self) -> Result<(), SessionError> {
        let mut my_player: Option<Player> = None;
        loop {
            // An identity assignment opens every game. Once at least one
            // game was played, a closed channel here is the normal way to
            // learn that the negotiation did not produce another game.
            let line = match self.channel.recv_line() {
                Ok(line) => line,
                Err(ChannelError::ConnectionClosed) if my_player.is_some() => {
                    info!("Session ended by the other player");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };
            let assigned = protocol::parse_player(&line)?;
            let me = match my_player {
                None => {
                    debug!("Assigned player: {:?}", assigned);
                    my_player = Some(assigned);
                    assigned
                }
                Some(me) if me == assigned => me,
                Some(_) => {
                    return Err(
                        ProtocolViolation { expected: "stable player assignment", got: line }
                            .into(),
                    );
                }
            };
            if self.play_game(me)? == Command::Quit {
                return Ok(());
            }
        }
    }

    fn play_game(&mut self, me: Player) -> Result<Command, SessionError> {
        // The first announcement of a game names the starter; after a
        // restart that may be either identity.
        let starter = {
            let line = self.channel.recv_line()?;
            protocol::parse_player(&line)?
        };
        let mut game = Game::new(starter);
        loop {
            let active = game.active_player();
            self.ui.board_updated(game.board(), me);
            let status = if game.player_is_active(me) {
                self.make_my_move(&mut game, me)?
            } else {
                self.apply_relayed_move(&mut game, active)?
            };
            match status {
                GameStatus::Active => {
                    if active == me {
                        self.channel.send_line(Command::Continue.to_wire())?;
                    }
                    // The next announcement must agree with the replica's
                    // own alternation, or the peers have diverged.
                    let line = self.channel.recv_line()?;
                    if protocol::parse_player(&line)? != game.active_player() {
                        return Err(ProtocolViolation {
                            expected: "the other player to become active",
                            got: line,
                        }
                        .into());
                    }
                }
                outcome => {
                    self.ui.game_over(game.board(), outcome);
                    // Both peers submit their vote right away; the
                    // coordinator decides in which order to read them.
                    let vote =
                        if self.ui.choose_restart()? { Command::Restart } else { Command::Quit };
                    self.channel.send_line(vote.to_wire())?;
                    return Ok(vote);
                }
            }
        }
    }

    // Solicits moves until one is locally legal, then sends it. Invalid
    // attempts are retried without consuming a protocol turn: the
    // coordinator never learns about them.
    fn make_my_move(&mut self, game: &mut Game, me: Player) -> Result<GameStatus, SessionError> {
        loop {
            let cell = self.ui.choose_cell(game.board(), me)?;
            match game.try_turn(me, cell) {
                Ok(status) => {
                    self.channel.send_line(&protocol::encode_cell(cell))?;
                    return Ok(status);
                }
                Err(TurnError::CellOccupied) => self.ui.cell_rejected(cell),
                Err(err) => unreachable!("own move rejected: {:?}", err),
            }
        }
    }

    fn apply_relayed_move(
        &mut self, game: &mut Game, mover: Player,
    ) -> Result<GameStatus, SessionError> {
        let line = self.channel.recv_line()?;
        let cell = protocol::parse_cell(&line)?;
        // The replica accepts relayed data only under the same placement
        // contract as its own moves; a rejection means divergence.
        game.try_turn(mover, cell).map_err(|_| {
            SessionError::Protocol(ProtocolViolation { expected: "a legal relayed move", got: line })
        })
    }
}
