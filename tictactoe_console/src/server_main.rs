use std::io;
use std::net::TcpListener;

use log::{error, info};
use tictactoe::server::Coordinator;

use crate::network;


pub struct ServerConfig {
    pub port: u16,
}

pub fn run(config: ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", config.port))?;
    info!("Starting server on port {}", config.port);
    let channels = network::accept_participants(&listener)?;
    // The coordinator owns the channels from here on and closes them when
    // the session is over, however it ends.
    if let Err(err) = Coordinator::new(channels).run() {
        error!("Session aborted: {:?}", err);
    }
    Ok(())
}
