// rcs380-rs/rcs380/src/protocol/mod.rs

pub mod ack;
pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use ack::AckKind;
pub use checksum::{checksum, lcs};
pub use commands::Command;
pub use frame::Frame;
pub use responses::*;
