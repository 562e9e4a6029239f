#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod client_main;
mod network;
mod server_main;
mod tui;

use std::io;

use clap::{Command, arg};

fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Tictactoe")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Networked tic-tac-toe client/server console app")
        .subcommand_required(true)
        .subcommand(
            Command::new("server").about("Run as server").arg(
                arg!(<port> "Port to listen on")
                    .value_parser(clap::value_parser!(u16).range(1024..)),
            ),
        )
        .subcommand(
            Command::new("client")
                .about("Run as client")
                .arg(arg!(<hostname> "Server hostname"))
                .arg(arg!(<port> "Server port").value_parser(clap::value_parser!(u16))),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("server", sub_matches)) => server_main::run(server_main::ServerConfig {
            port: *sub_matches.get_one::<u16>("port").unwrap(),
        }),
        Some(("client", sub_matches)) => client_main::run(client_main::ClientConfig {
            hostname: sub_matches.get_one::<String>("hostname").unwrap().clone(),
            port: *sub_matches.get_one::<u16>("port").unwrap(),
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
