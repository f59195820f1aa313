use std::io::Cursor;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use crate::net::frames::error::{ParseError, WriteError};

#[async_trait]
pub trait OutputFrame {
    async fn write_to(
        &self,
        writer: &mut (impl AsyncWriteExt + Unpin + Send),
    ) -> Result<(), WriteError>;
}

pub trait InputFrame {
    fn parse(src: &mut Cursor<&[u8]>) -> Result<Self, ParseError>
    where
        Self: Sized;
}

pub trait Frame: OutputFrame + InputFrame {}
impl<T> Frame for T where T: OutputFrame + InputFrame {}

/// Frames are JSON, one per `\r\n`-terminated line.
pub fn parse<T: for<'a> Deserialize<'a>>(src: &mut Cursor<&[u8]>) -> Result<T, ParseError> {
    let line = take_line(src)?.to_vec();
    let str = String::from_utf8(line)?;
    let deserialized = serde_json::from_str::<T>(&str)?;
    Ok(deserialized)
}

pub async fn write_serialized(
    writer: &mut (impl AsyncWriteExt + Unpin),
    data: impl Serialize,
) -> Result<(), WriteError> {
    let serialized = serde_json::to_string(&data)?;
    writer.write_all(serialized.as_bytes()).await?;
    writer.write_all(b"\r\n").await?;
    Ok(())
}

/// Takes one line off the cursor, advancing it past the terminator. The
/// cursor is only moved when a full line is available.
fn take_line<'a>(src: &mut Cursor<&'a [u8]>) -> Result<&'a [u8], ParseError> {
    let buf = *src.get_ref();
    let start = src.position() as usize;

    match buf[start..].windows(2).position(|w| w == b"\r\n") {
        Some(offset) => {
            src.set_position((start + offset + 2) as u64);
            Ok(&buf[start..start + offset])
        }
        None => Err(ParseError::Incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_line_waits_for_the_terminator() {
        let data = b"partial";
        let mut cursor = Cursor::new(&data[..]);
        assert!(matches!(take_line(&mut cursor), Err(ParseError::Incomplete)));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn take_line_consumes_exactly_one_line() {
        let data = b"first\r\nsecond\r\n";
        let mut cursor = Cursor::new(&data[..]);

        assert_eq!(take_line(&mut cursor).unwrap(), b"first");
        assert_eq!(take_line(&mut cursor).unwrap(), b"second");
        assert!(matches!(take_line(&mut cursor), Err(ParseError::Incomplete)));
    }
}
