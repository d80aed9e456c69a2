use anyhow::Result;
use fresh::{fetch_latest, IsStale};
use std::convert::Infallible;
use tokio::time::{sleep, Duration, Instant};

async fn slow_echo(value: u32) -> Result<u32, Infallible> {
    sleep(Duration::from_millis(100)).await;
    Ok(value)
}

#[tokio::test(start_paused = true)]
async fn test_sequential_calls_are_fresh() -> Result<()> {
    let fetch = fetch_latest(slow_echo);
    let started = Instant::now();

    assert_eq!(fetch.call(1).await.ok(), Some(1));
    assert_eq!(fetch.call(2).await.ok(), Some(2));
    assert!(started.elapsed() >= Duration::from_millis(200));
    Ok(())
}

#[tokio::test]
async fn test_many_sequential_calls() -> Result<()> {
    let fetch = fetch_latest(|value: u32| async move { Ok::<_, Infallible>(value * 2) });
    for value in 0..50 {
        assert_eq!(fetch.call(value).await.ok(), Some(value * 2));
    }
    assert_eq!(fetch.sequencer().issued(), 50);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_latest_is_never_delayed() -> Result<()> {
    let fetch = fetch_latest(|delay: u64| async move {
        sleep(Duration::from_millis(delay)).await;
        Ok::<_, Infallible>(delay)
    });
    let slow = fetch.call(1_000);
    let started = Instant::now();

    assert_eq!(fetch.call(10).await.ok(), Some(10));
    assert!(started.elapsed() < Duration::from_millis(1_000));
    assert!(slow.await.is_stale());
    Ok(())
}
