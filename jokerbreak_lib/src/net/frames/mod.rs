mod base;
pub use base::*;

mod error;
pub use error::*;

mod client;
pub use client::*;

mod server;
pub use server::*;

mod lobby;
pub use lobby::*;

mod game;
pub use game::*;
