//! Diagnostics system operations

mod ping;

pub use ping::{PingOperation, PingRequest, PING_RUNNING};
