use crate::net::frames::base::{parse, write_serialized, InputFrame, OutputFrame};
use crate::net::frames::error::{ParseError, WriteError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tokio::io::AsyncWriteExt;

use super::game::PlayerToGameMessage;
use super::lobby::PlayerToLobbyMessage;

/// Everything a client may send.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ClientMessageFrame {
    Lobby(PlayerToLobbyMessage),
    Game(PlayerToGameMessage),
}

#[async_trait]
impl OutputFrame for ClientMessageFrame {
    async fn write_to(
        &self,
        writer: &mut (impl AsyncWriteExt + Unpin + Send),
    ) -> Result<(), WriteError> {
        write_serialized(writer, self).await
    }
}

impl InputFrame for ClientMessageFrame {
    fn parse(src: &mut Cursor<&[u8]>) -> Result<Self, ParseError> {
        parse::<Self>(src)
    }
}
