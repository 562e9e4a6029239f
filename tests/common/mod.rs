use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex, mpsc};

use tictactoe::board::{Board, CellIndex};
use tictactoe::channel::{ChannelError, PeerChannel};
use tictactoe::client::ClientUi;
use tictactoe::game::GameStatus;
use tictactoe::player::Player;


pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}


// Channel fake fed from a fixed script: `recv_line` pops the next queued
// line and reports a closed connection once the script runs out. Sent lines
// are recorded through a shared handle so they stay inspectable after the
// coordinator or peer agent consumed the channel.
pub struct ScriptedChannel {
    incoming: VecDeque<String>,
    sent: Rc<RefCell<Vec<String>>>,
}

impl ScriptedChannel {
    pub fn new(incoming: &[&str]) -> (Self, Rc<RefCell<Vec<String>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let channel = ScriptedChannel {
            incoming: incoming.iter().map(|s| s.to_string()).collect(),
            sent: Rc::clone(&sent),
        };
        (channel, sent)
    }
}

impl PeerChannel for ScriptedChannel {
    fn send_line(&mut self, line: &str) -> Result<(), ChannelError> {
        self.sent.borrow_mut().push(line.to_owned());
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String, ChannelError> {
        self.incoming.pop_front().ok_or(ChannelError::ConnectionClosed)
    }
}


// In-memory duplex pair for running a real coordinator against real peer
// agents on separate threads.
pub struct PairedChannel {
    tx: mpsc::Sender<String>,
    rx: mpsc::Receiver<String>,
}

#[allow(dead_code)]
pub fn channel_pair() -> (PairedChannel, PairedChannel) {
    let (tx_a, rx_b) = mpsc::channel();
    let (tx_b, rx_a) = mpsc::channel();
    (PairedChannel { tx: tx_a, rx: rx_a }, PairedChannel { tx: tx_b, rx: rx_b })
}

impl PeerChannel for PairedChannel {
    fn send_line(&mut self, line: &str) -> Result<(), ChannelError> {
        self.tx.send(line.to_owned()).map_err(|_| ChannelError::ConnectionClosed)
    }

    fn recv_line(&mut self) -> Result<String, ChannelError> {
        self.rx.recv().map_err(|_| ChannelError::ConnectionClosed)
    }
}


// Frontend fake playing from a predetermined list of cells and votes.
pub struct ScriptedUi {
    moves: VecDeque<u8>,
    votes: VecDeque<bool>,
    pub outcomes: Arc<Mutex<Vec<GameStatus>>>,
    pub rejected: Arc<Mutex<Vec<u8>>>,
}

impl ScriptedUi {
    pub fn new(moves: &[u8], votes: &[bool]) -> Self {
        ScriptedUi {
            moves: moves.iter().copied().collect(),
            votes: votes.iter().copied().collect(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            rejected: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ClientUi for ScriptedUi {
    fn choose_cell(&mut self, _board: &Board, _me: Player) -> io::Result<CellIndex> {
        let idx = self.moves.pop_front().expect("script ran out of moves");
        Ok(CellIndex::from_zero_based(idx).expect("scripted move out of range"))
    }

    fn cell_rejected(&mut self, cell: CellIndex) {
        self.rejected.lock().unwrap().push(cell.to_zero_based());
    }

    fn board_updated(&mut self, _board: &Board, _me: Player) {}

    fn game_over(&mut self, _board: &Board, outcome: GameStatus) {
        self.outcomes.lock().unwrap().push(outcome);
    }

    fn choose_restart(&mut self) -> io::Result<bool> {
        Ok(self.votes.pop_front().unwrap_or(false))
    }
}
