//! Sentence-aligned chunking of streamed text.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default upper bound, in characters, for a chunk built from several sentences.
pub const DEFAULT_CHUNK_LENGTH: usize = 128;

static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Buffers text and releases it in runs of whole sentences.
///
/// A single sentence longer than `chunk_length` is still released whole.
#[derive(Clone, Debug)]
pub struct SentenceChunker {
    buffer: String,
    chunk_length: usize,
    emit_paragraphs: bool,
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_LENGTH, true)
    }
}

impl SentenceChunker {
    pub fn new(chunk_length: usize, emit_paragraphs: bool) -> Self {
        Self {
            buffer: String::new(),
            chunk_length,
            emit_paragraphs,
        }
    }

    /// Feed `data` and return every chunk it completes.
    pub fn push(&mut self, data: &str) -> Vec<String> {
        let mut out = Vec::new();
        let pieces = split_paragraphs(data);
        let count = pieces.len();
        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let mut buffer_len = self.buffer.chars().count();
            for sentence in split_sentences(piece) {
                let len = sentence.chars().count();
                if len == 0 {
                    continue;
                }
                if buffer_len + len <= self.chunk_length {
                    self.buffer.push_str(sentence);
                    buffer_len += len;
                } else {
                    if buffer_len > 0 {
                        out.extend(emit(&self.buffer));
                    }
                    self.buffer = sentence.to_string();
                    buffer_len = len;
                }
            }
            if self.emit_paragraphs && count > 1 && i < count - 1 {
                out.extend(emit(&self.buffer));
                self.buffer.clear();
            }
        }
        out
    }

    /// Release whatever is still buffered.
    pub fn flush(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let chunk = emit(&self.buffer);
        self.buffer.clear();
        chunk
    }

    pub fn buffered(&self) -> &str {
        &self.buffer
    }
}

/// Chunker for replies that arrive as the whole text generated so far.
///
/// Each push carries the full reply; only the part past what was already seen
/// is fed to the inner [`SentenceChunker`].
#[derive(Clone, Debug, Default)]
pub struct GrowingSentenceChunker {
    inner: SentenceChunker,
    seen: String,
}

impl GrowingSentenceChunker {
    pub fn new(chunk_length: usize, emit_paragraphs: bool) -> Self {
        Self {
            inner: SentenceChunker::new(chunk_length, emit_paragraphs),
            seen: String::new(),
        }
    }

    pub fn push(&mut self, reply: &str) -> Vec<String> {
        let fresh = reply.get(self.seen.len()..).unwrap_or_default();
        self.seen.push_str(fresh);
        self.inner.push(fresh)
    }

    /// Release buffered text and forget the reply seen so far.
    pub fn flush(&mut self) -> Option<String> {
        self.seen.clear();
        self.inner.flush()
    }
}

fn emit(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if !trimmed.chars().any(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    trace!("chunk ready: {trimmed}");
    Some(trimmed.to_string())
}

/// Split on newline runs, keeping each run as its own piece.
///
/// Leading and trailing pieces may be empty so the count reflects every
/// separator.
fn split_paragraphs(data: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in NEWLINES.find_iter(data) {
        pieces.push(&data[last..m.start()]);
        pieces.push(m.as_str());
        last = m.end();
    }
    pieces.push(&data[last..]);
    pieces
}

fn is_full_width_stop(c: char) -> bool {
    matches!(c, '；' | '：' | '，' | '。' | '！' | '？')
}

/// Split after `;:,.!?` plus trailing whitespace, or after a full-width stop.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_stop = false;
    for (idx, c) in text.char_indices() {
        let end = idx + c.len_utf8();
        if matches!(c, ';' | ':' | ',' | '.' | '!' | '?') {
            after_stop = true;
        } else if c.is_whitespace() && after_stop {
            sentences.push(&text[start..end]);
            start = end;
        } else if is_full_width_stop(c) {
            after_stop = false;
            sentences.push(&text[start..end]);
            start = end;
        } else {
            after_stop = false;
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}
