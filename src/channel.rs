use std::io;


// Blocking line-oriented duplex channel to one peer. One logical message
// per line; the line delimiter never appears in the returned payload.
pub trait PeerChannel {
    fn send_line(&mut self, line: &str) -> Result<(), ChannelError>;

    // Blocks until a full line arrives or the channel dies.
    fn recv_line(&mut self) -> Result<String, ChannelError>;
}


#[derive(Debug)]
pub enum ChannelError {
    // The peer closed the connection. Fatal for the session: no partial
    // games survive a disconnect.
    ConnectionClosed,
    Io(io::Error),
}

impl From<io::Error> for ChannelError {
    fn from(err: io::Error) -> Self { ChannelError::Io(err) }
}
