use super::{BufferConfig, EventBuffer, run_buffer};
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::Instant;

#[test]
fn push_returns_a_batch_when_full() {
    let mut buffer = EventBuffer::new(3);

    assert_eq!(buffer.push(1), None);
    assert_eq!(buffer.push(2), None);
    assert_eq!(buffer.push(3), Some(vec![1, 2, 3]));
    assert!(buffer.is_empty());
}

#[test]
fn flush_of_empty_buffer_returns_nothing() {
    let mut buffer: EventBuffer<u32> = EventBuffer::new(10);

    assert_eq!(buffer.flush(), None);
}

#[test]
fn flush_resets_the_queue() {
    let mut buffer = EventBuffer::new(10);
    buffer.push("a");
    buffer.push("b");

    assert_eq!(buffer.flush(), Some(vec!["a", "b"]));
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.push("c"), None);
    assert_eq!(buffer.flush(), Some(vec!["c"]));
}

#[test]
fn zero_capacity_behaves_as_one() {
    let mut buffer = EventBuffer::new(0);

    assert_eq!(buffer.push(7), Some(vec![7]));
}

#[tokio::test(start_paused = true)]
async fn events_are_flushed_on_the_interval() {
    let (events_tx, events_rx) = unbounded_channel();
    let (batches_tx, mut batches_rx) = unbounded_channel();
    let start = Instant::now();
    tokio::spawn(run_buffer(BufferConfig::default(), events_rx, batches_tx));

    events_tx.send(1).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    events_tx.send(2).unwrap();

    let batch = batches_rx.recv().await.unwrap();

    assert_eq!(batch, vec![1, 2]);
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn full_buffer_is_flushed_before_the_interval() {
    let (events_tx, events_rx) = unbounded_channel();
    let (batches_tx, mut batches_rx) = unbounded_channel();
    let config = BufferConfig {
        max_buffered_events: 5,
        ..Default::default()
    };
    let start = Instant::now();
    tokio::spawn(run_buffer(config, events_rx, batches_tx));

    for event in 0..7 {
        events_tx.send(event).unwrap();
    }

    let first = batches_rx.recv().await.unwrap();
    assert_eq!(first, vec![0, 1, 2, 3, 4]);
    assert!(start.elapsed() < Duration::from_millis(500));

    let second = batches_rx.recv().await.unwrap();
    assert_eq!(second, vec![5, 6]);
}

#[tokio::test(start_paused = true)]
async fn overflow_restarts_the_flush_interval() {
    let (events_tx, events_rx) = unbounded_channel();
    let (batches_tx, mut batches_rx) = unbounded_channel();
    let config = BufferConfig {
        max_buffered_events: 3,
        ..Default::default()
    };
    let start = Instant::now();
    tokio::spawn(run_buffer(config, events_rx, batches_tx));

    tokio::time::sleep_until(start + Duration::from_millis(400)).await;
    for event in 0..3 {
        events_tx.send(event).unwrap();
    }
    assert_eq!(batches_rx.recv().await.unwrap(), vec![0, 1, 2]);
    assert!(start.elapsed() < Duration::from_millis(500));

    events_tx.send(3).unwrap();
    let batch = batches_rx.recv().await.unwrap();

    assert_eq!(batch, vec![3]);
    assert!(start.elapsed() >= Duration::from_millis(900));
}

#[tokio::test(start_paused = true)]
async fn disabled_buffer_delivers_each_event() {
    let (events_tx, events_rx) = unbounded_channel();
    let (batches_tx, mut batches_rx) = unbounded_channel();
    tokio::spawn(run_buffer(BufferConfig::disabled(), events_rx, batches_tx));

    events_tx.send("a").unwrap();
    events_tx.send("b").unwrap();

    assert_eq!(batches_rx.recv().await.unwrap(), vec!["a"]);
    assert_eq!(batches_rx.recv().await.unwrap(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn pending_events_are_flushed_when_input_closes() {
    let (events_tx, events_rx) = unbounded_channel();
    let (batches_tx, mut batches_rx) = unbounded_channel();
    tokio::spawn(run_buffer(BufferConfig::default(), events_rx, batches_tx));

    events_tx.send(1).unwrap();
    drop(events_tx);

    assert_eq!(batches_rx.recv().await.unwrap(), vec![1]);
    assert_eq!(batches_rx.recv().await, None);
}
