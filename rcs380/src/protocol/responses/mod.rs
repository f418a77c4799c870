// rcs380-rs/rcs380/src/protocol/responses/mod.rs

pub mod sense;

pub use sense::{SenseOutcome, card_present, extract_identifier};
