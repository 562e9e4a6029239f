use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

use enum_map::EnumMap;
use log::info;
use tictactoe::channel::{ChannelError, PeerChannel};
use tictactoe::player::Player;
use tictactoe::protocol::MAX_PLAYERS;


// One connected peer. The stream is cloned so that the buffered read half
// and the write half can live side by side.
pub struct TcpChannel {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl TcpChannel {
    pub fn new(stream: TcpStream) -> io::Result<Self> {
        let reader = BufReader::new(stream.try_clone()?);
        Ok(TcpChannel { reader, writer: stream })
    }
}

impl PeerChannel for TcpChannel {
    fn send_line(&mut self, line: &str) -> Result<(), ChannelError> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String, ChannelError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ChannelError::ConnectionClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}


// Blocks until exactly two peers are connected. Identities are assigned in
// arrival order: the first-accepted connection plays first in game one.
pub fn accept_participants(listener: &TcpListener) -> io::Result<EnumMap<Player, TcpChannel>> {
    let mut channels = Vec::with_capacity(MAX_PLAYERS);
    for _ in 0..MAX_PLAYERS {
        let (stream, peer_addr) = listener.accept()?;
        info!("Client connected: {}", peer_addr);
        channels.push(TcpChannel::new(stream)?);
    }
    info!("All clients connected. The game can be started!");
    let Ok(channels) = <[TcpChannel; MAX_PLAYERS]>::try_from(channels) else {
        unreachable!("the accept loop yields exactly {} channels", MAX_PLAYERS);
    };
    Ok(EnumMap::from_array(channels))
}

pub fn connect(hostname: &str, port: u16) -> io::Result<TcpChannel> {
    let stream = TcpStream::connect((hostname, port))?;
    info!("Connected to server at {}:{}", hostname, port);
    TcpChannel::new(stream)
}
