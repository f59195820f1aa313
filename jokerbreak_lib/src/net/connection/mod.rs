mod read;
pub use {read::ConnectionReader, read::ReadError};

mod write;
pub use write::ConnectionWriter;
