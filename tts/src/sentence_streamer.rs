use log::warn;
use tokio::sync::mpsc;

use crate::chunker::GrowingSentenceChunker;
use crate::{Result, TTSError};

/// Chunk a growing reply and invoke a speak function sequentially.
pub struct SentenceStreamer {
    tx: mpsc::Sender<String>,
    chunker: GrowingSentenceChunker,
}

impl SentenceStreamer {
    /// Spawn a new background task using the provided synchronous speak function.
    pub fn new<F>(speak: F) -> Self
    where
        F: FnMut(String) -> Result<Vec<u8>> + Send + 'static,
    {
        Self::with_chunker(speak, GrowingSentenceChunker::default())
    }

    pub fn with_chunker<F>(mut speak: F, chunker: GrowingSentenceChunker) -> Self
    where
        F: FnMut(String) -> Result<Vec<u8>> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<String>(8);
        tokio::spawn(async move {
            while let Some(sentence) = rx.recv().await {
                if let Err(e) = speak(sentence) {
                    warn!("speak failed: {e}");
                }
            }
        });
        Self { tx, chunker }
    }

    /// Enqueue a sentence to be synthesized.
    pub async fn enqueue(&self, text: String) -> Result<()> {
        self.tx
            .send(text)
            .await
            .map_err(|_| TTSError::QueueClosed)?;
        Ok(())
    }

    /// Wait until the speak worker has stopped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }

    /// Feed the reply generated so far, enqueueing every completed chunk.
    pub async fn push(&mut self, reply: &str) -> Result<()> {
        for chunk in self.chunker.push(reply) {
            self.enqueue(chunk).await?;
        }
        Ok(())
    }

    /// Enqueue whatever is left once the reply is complete.
    pub async fn flush(&mut self) -> Result<()> {
        if let Some(chunk) = self.chunker.flush() {
            self.enqueue(chunk).await?;
        }
        Ok(())
    }
}
