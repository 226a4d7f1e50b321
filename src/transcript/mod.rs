//! Conversation transcript.
//!
//! The chat loop appends every turn; `chatmine history` reads it back. The
//! resolver never touches it.

pub mod store;

pub use store::{TranscriptEntry, TranscriptStore};
