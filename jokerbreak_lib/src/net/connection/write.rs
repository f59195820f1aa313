use crate::net::frames::{Frame, WriteError};
use std::marker::PhantomData;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes frames of one output type to a byte stream, flushing per frame.
pub struct ConnectionWriter<TWrite, TOutput>
where
    TWrite: AsyncWrite + Unpin + Send,
    TOutput: Frame,
{
    stream: TWrite,
    phantom: PhantomData<TOutput>,
}

impl<TWrite: AsyncWrite + Unpin + Send, TOutput: Frame> ConnectionWriter<TWrite, TOutput> {
    pub fn new(stream: TWrite) -> Self {
        Self {
            stream,
            phantom: PhantomData,
        }
    }

    pub async fn write_frame(&mut self, frame: &TOutput) -> Result<(), WriteError> {
        frame.write_to(&mut self.stream).await?;
        self.stream.flush().await?;
        Ok(())
    }
}
