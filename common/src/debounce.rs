//! # Input Debouncing
//!
//! Live search fields fire on every keystroke. [`Debouncer`] coalesces those
//! events so the filter behind the field runs once the input has been
//! stable for a quiet window, and only when the settled value differs from
//! the one it last ran with.
//!
//! ```text
//! push("1") push("10") push("10.")   ...300ms...   on_settle("10.")
//! ```

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{JoinError, JoinHandle};
use tokio::time;
use tracing::{debug, warn};

pub struct Debouncer<T> {
    tx: UnboundedSender<T>,
    handle: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    /// Spawns the debounce task on the current tokio runtime.
    pub fn spawn<F>(window: Duration, on_settle: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(rx, window, on_settle));
        Self { tx, handle }
    }

    /// Records the latest input and restarts the quiet window.
    ///
    /// Returns `false` when the debounce task is gone (its callback
    /// panicked), in which case the value is dropped.
    pub fn push(&self, value: T) -> bool {
        if self.tx.send(value).is_err() {
            warn!("debounce task stopped, dropping input");
            return false;
        }
        true
    }

    /// Ends the input stream. A pending value settles immediately.
    pub async fn close(self) -> Result<(), JoinError> {
        drop(self.tx);
        self.handle.await
    }
}

struct Settler<T, F> {
    last: Option<T>,
    on_settle: F,
}

impl<T, F> Settler<T, F>
where
    T: PartialEq + Clone,
    F: FnMut(T),
{
    fn settle(&mut self, value: T) {
        if self.last.as_ref() == Some(&value) {
            debug!("debounced value unchanged, skipping");
            return;
        }
        debug!("debounced value settled");
        (self.on_settle)(value.clone());
        self.last = Some(value);
    }
}

async fn run<T, F>(mut rx: UnboundedReceiver<T>, window: Duration, on_settle: F)
where
    T: PartialEq + Clone,
    F: FnMut(T),
{
    let mut settler = Settler { last: None, on_settle };
    let mut pending: Option<T> = None;

    loop {
        let Some(value) = pending.take() else {
            match rx.recv().await {
                Some(value) => pending = Some(value),
                None => break,
            }
            continue;
        };

        tokio::select! {
            next = rx.recv() => match next {
                Some(newer) => pending = Some(newer),
                None => {
                    settler.settle(value);
                    break;
                }
            },
            _ = time::sleep(window) => settler.settle(value),
        }
    }
}
