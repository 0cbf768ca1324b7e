//! Write-behind decorator
//!
//! `write` records the latest bytes per key and returns immediately; a
//! background task drains them into the wrapped store. Bursts of writes to
//! the same key collapse into a single underlying write, and reads see the
//! pending bytes before they reach disk. Bytes whose write fails stay
//! pending and are retried on the next drain.

use super::KeyValueStore;
use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

type Pending = Arc<Mutex<HashMap<String, Vec<u8>>>>;

enum Command {
    Write,
    Flush(oneshot::Sender<Result<(), StorageError>>),
}

pub struct WriteBehindStore<S> {
    inner: Arc<S>,
    pending: Pending,
    tx: mpsc::UnboundedSender<Command>,
}

impl<S: KeyValueStore + 'static> WriteBehindStore<S> {
    /// Wrap `inner` and start the drain task. Must be called inside a tokio runtime.
    pub fn spawn(inner: S) -> Self {
        let inner = Arc::new(inner);
        let pending: Pending = Arc::default();
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(drain(Arc::clone(&inner), Arc::clone(&pending), rx));
        Self { inner, pending, tx }
    }

    /// Wait until every write issued before this call has reached the inner store.
    ///
    /// Fails with [`StorageError::WriteFailed`] when a pending write could not
    /// be stored; those bytes remain pending and readable.
    pub async fn flush(&self) -> Result<(), StorageError> {
        let (done, wait) = oneshot::channel();
        self.tx
            .send(Command::Flush(done))
            .map_err(|_| StorageError::WorkerStopped)?;
        wait.await.map_err(|_| StorageError::WorkerStopped)?
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyValueStore + 'static> KeyValueStore for WriteBehindStore<S> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(bytes) = pending.get(key) {
            return Ok(Some(bytes.clone()));
        }
        drop(pending);
        self.inner.read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), bytes.to_vec());
        self.tx
            .send(Command::Write)
            .map_err(|_| StorageError::WorkerStopped)
    }
}

async fn drain<S: KeyValueStore + 'static>(
    inner: Arc<S>,
    pending: Pending,
    mut rx: mpsc::UnboundedReceiver<Command>,
) {
    while let Some(first) = rx.recv().await {
        let mut waiters = Vec::new();
        let mut next = Some(first);
        while let Some(command) = next {
            if let Command::Flush(done) = command {
                waiters.push(done);
            }
            next = rx.try_recv().ok();
        }

        // Every pending key, including ones left over from a failed drain
        let batch: Vec<(String, Vec<u8>)> = pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(key, bytes)| (key.clone(), bytes.clone()))
            .collect();

        let mut failure = None;
        for (key, bytes) in batch {
            match write_through(&inner, &key, &bytes).await {
                Ok(()) => {
                    // Keep newer bytes that arrived while the write was in flight
                    let mut pending = pending.lock().unwrap_or_else(PoisonError::into_inner);
                    if pending.get(&key) == Some(&bytes) {
                        pending.remove(&key);
                    }
                }
                Err(reason) => {
                    warn!(key = %key, error = %reason, "Background write failed, keeping bytes pending");
                    failure.get_or_insert((key, reason));
                }
            }
        }

        for done in waiters {
            let result = match &failure {
                None => Ok(()),
                Some((key, reason)) => Err(StorageError::WriteFailed {
                    key: key.clone(),
                    reason: reason.clone(),
                }),
            };
            let _ = done.send(result);
        }
    }
    debug!("Write-behind worker stopped");
}

async fn write_through<S: KeyValueStore + 'static>(
    inner: &Arc<S>,
    key: &str,
    bytes: &[u8],
) -> Result<(), String> {
    let store = Arc::clone(inner);
    let owned_key = key.to_string();
    let owned_bytes = bytes.to_vec();
    match tokio::task::spawn_blocking(move || store.write(&owned_key, &owned_bytes)).await {
        Ok(Ok(())) => {
            debug!(key, "Flushed pending write");
            Ok(())
        }
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => Err(format!("write task panicked: {e}")),
    }
}
