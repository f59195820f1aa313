use crate::net::frames::{Frame, ParseError};
use bytes::{Buf, BytesMut};
use std::io::Cursor;
use std::marker::PhantomData;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Buffered reader that reassembles frames of one input type from a byte
/// stream.
pub struct ConnectionReader<TRead, TInput>
where
    TRead: AsyncRead + Unpin,
    TInput: Frame,
{
    stream: TRead,
    buffer: BytesMut,
    phantom: PhantomData<TInput>,
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("io error while reading a frame")]
    IOError(#[from] std::io::Error),
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
    #[error("the peer closed the connection")]
    ConnectionClosed {
        /// False when the peer went away in the middle of a frame.
        is_clean_shutdown: bool,
    },
}

impl<TRead: AsyncRead + Unpin, TInput: Frame> ConnectionReader<TRead, TInput> {
    pub fn new(stream: TRead) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            phantom: PhantomData,
        }
    }

    /// Reads until one whole frame is buffered and returns it.
    pub async fn read_frame(&mut self) -> Result<TInput, ReadError> {
        loop {
            if let Some(frame) = self.parse_frame()? {
                return Ok(frame);
            }

            // `0` read means the peer closed; anything buffered at that
            // point is half a frame.
            if 0 == self.stream.read_buf(&mut self.buffer).await? {
                return Err(ReadError::ConnectionClosed {
                    is_clean_shutdown: self.buffer.is_empty(),
                });
            }
        }
    }

    fn parse_frame(&mut self) -> Result<Option<TInput>, ReadError> {
        let mut buf = Cursor::new(&self.buffer[..]);

        match TInput::parse(&mut buf) {
            Ok(frame) => {
                self.buffer.advance(buf.position() as usize);
                Ok(Some(frame))
            }
            Err(ParseError::Incomplete) => Ok(None),
            Err(ParseError::InvalidMessage(err)) => {
                // The offending line has been consumed from the cursor;
                // drop it from the buffer too so one bad message cannot
                // wedge the connection.
                self.buffer.advance(buf.position() as usize);
                Err(ReadError::InvalidFrame(err))
            }
        }
    }
}
