use tts::{GrowingSentenceChunker, SentenceStreamer, TTSError};

#[tokio::test]
async fn paragraph_breaks_reach_the_speaker() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut streamer = SentenceStreamer::new(move |s| {
        let _ = tx.send(s);
        Ok(Vec::new())
    });
    streamer.push("Good evening.\n").await.unwrap();
    streamer.push("Good evening.\nAll systems nominal.").await.unwrap();
    assert_eq!(rx.recv().await.unwrap(), "Good evening.");
    streamer.flush().await.unwrap();
    assert_eq!(rx.recv().await.unwrap(), "All systems nominal.");
}

#[tokio::test]
async fn growing_reply_is_spoken_in_chunks() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut streamer = SentenceStreamer::with_chunker(
        move |s| {
            let _ = tx.send(s);
            Ok(Vec::new())
        },
        GrowingSentenceChunker::new(16, true),
    );
    streamer.push("Affirmative. ").await.unwrap();
    streamer.push("Affirmative. The lights are now on.").await.unwrap();
    streamer.flush().await.unwrap();

    assert_eq!(rx.recv().await.unwrap(), "Affirmative.");
    assert_eq!(rx.recv().await.unwrap(), "The lights are now on.");
}

#[tokio::test]
async fn speak_errors_do_not_stop_worker() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let streamer = SentenceStreamer::new(move |s: String| {
        if s == "fail" {
            return Err(TTSError::Speech("synthesizer offline".into()));
        }
        let _ = tx.send(s);
        Ok(Vec::new())
    });
    streamer.enqueue("fail".into()).await.unwrap();
    streamer.enqueue("ok".into()).await.unwrap();
    assert_eq!(rx.recv().await.unwrap(), "ok");
}

#[tokio::test]
async fn stopped_worker_closes_the_queue() {
    let mut streamer = SentenceStreamer::new(|s: String| -> tts::Result<Vec<u8>> {
        panic!("speaker crashed on {s}")
    });
    streamer.enqueue("first".into()).await.unwrap();
    streamer.closed().await;

    assert!(matches!(
        streamer.enqueue("second".into()).await,
        Err(TTSError::QueueClosed)
    ));
    assert!(matches!(
        streamer.push("Line one.\nLine two").await,
        Err(TTSError::QueueClosed)
    ));
    assert!(matches!(streamer.flush().await, Err(TTSError::QueueClosed)));
}
