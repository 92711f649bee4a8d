//! Wire protocol between clients and the collaboration server
//!
//! JSON messages tagged by `type`:
//!
//! - client → server: `join`, `op`
//! - server → client: `doc`, `ack`, `op`, `join`, `leave`, `error`
//!
//! Operations travel as `{"ops": [{"retain": n} | {"insert": s} | {"delete": n}]}`.

mod message;
mod serialize;

pub use message::{ClientInfo, ClientMessage, ServerMessage};
pub use serialize::{decode_message, encode_message};
