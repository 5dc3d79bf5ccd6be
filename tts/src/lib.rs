//! Prepare streamed assistant replies for text-to-speech.
//!
//! Language models stream their answer a few tokens at a time, but speech
//! synthesis sounds best when fed whole sentences. [`SentenceChunker`] buffers
//! incoming text into sentence-aligned chunks and [`SentenceStreamer`] queues
//! those chunks for a speak function running on a background task.

pub mod chunker;
pub mod sentence_streamer;
pub mod text;

pub use chunker::{GrowingSentenceChunker, SentenceChunker, DEFAULT_CHUNK_LENGTH};
pub use sentence_streamer::SentenceStreamer;
pub use text::{collapse_newlines, replace_quotes};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TTSError {
    #[error("sentence queue closed")]
    QueueClosed,
    #[error("speech synthesis failed: {0}")]
    Speech(String),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, TTSError>;
