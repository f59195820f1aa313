mod post_office;
pub use post_office::spawn_connection;

use jokerbreak_lib::net::connection::{ConnectionReader, ConnectionWriter};
use jokerbreak_lib::net::frames::{ClientMessageFrame, ServerMessageFrame};
use std::fmt;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

pub type GameConnectionReader = ConnectionReader<OwnedReadHalf, ClientMessageFrame>;
pub type GameConnectionWriter = ConnectionWriter<OwnedWriteHalf, ServerMessageFrame>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub u32);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
