use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Forwards search input once it has been quiet for `quiet`, skipping values
/// equal to the last one forwarded. A pending value is flushed when the input
/// closes.
pub fn debounce_filter(mut input: mpsc::Receiver<String>, quiet: Duration) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut pending: Option<String> = None;
        let mut deadline = Instant::now();
        let mut last_sent: Option<String> = None;

        loop {
            tokio::select! {
                received = input.recv() => match received {
                    Some(value) => {
                        pending = Some(value);
                        deadline = Instant::now() + quiet;
                    }
                    None => break,
                },
                _ = sleep_until(deadline), if pending.is_some() => {
                    if let Some(value) = pending.take() {
                        if !forward(&tx, &mut last_sent, value).await {
                            return;
                        }
                    }
                }
            }
        }

        if let Some(value) = pending.take() {
            forward(&tx, &mut last_sent, value).await;
        }
    });

    rx
}

// false once the receiving side is gone
async fn forward(tx: &mpsc::Sender<String>, last_sent: &mut Option<String>, value: String) -> bool {
    if last_sent.as_deref() == Some(value.as_str()) {
        debug!("skipping repeated filter {:?}", value);
        return true;
    }
    *last_sent = Some(value.clone());
    tx.send(value).await.is_ok()
}
