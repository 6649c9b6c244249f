//! Blocking-call plumbing shared by remote sources.

use anyhow::bail;
use std::sync::{mpsc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// Runs `f` on a worker thread and waits at most `timeout` for it.
///
/// Blocking calls cannot be cancelled; a timed out worker finishes on its own
/// and its result is dropped.
pub fn call_with_timeout<T, F>(timeout: Duration, what: &str, f: F) -> anyhow::Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => bail!("{what} timed out after {timeout:?}"),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            bail!("{what} worker exited without a reply")
        }
    }
}

/// A lazily opened connection that can be released and reopened.
pub struct ConnectionSlot<C> {
    slot: Mutex<Option<C>>,
}

impl<C: Clone> ConnectionSlot<C> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns the open connection, calling `connect` if there is none.
    pub fn get_or_connect(
        &self,
        connect: impl FnOnce() -> anyhow::Result<C>,
    ) -> anyhow::Result<C> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(connection) = slot.as_ref() {
            return Ok(connection.clone());
        }

        let connection = connect()?;
        *slot = Some(connection.clone());
        Ok(connection)
    }

    /// Drops the held connection. Returns whether one was open.
    pub fn release(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }
}

impl<C: Clone> Default for ConnectionSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn slow_call_times_out() {
        let err = call_with_timeout(Duration::from_millis(50), "query /component/product", || {
            thread::sleep(Duration::from_millis(500));
            Ok("RX-51".to_string())
        })
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("query /component/product"), "{message}");
        assert!(message.contains("timed out"), "{message}");
    }

    #[test]
    fn fast_call_returns_value_and_errors() {
        let value = call_with_timeout(Duration::from_millis(500), "query", || {
            Ok("etsi/eu".to_string())
        })
        .unwrap();
        assert_eq!(value, "etsi/eu");

        let err = call_with_timeout::<String, _>(Duration::from_millis(500), "query", || {
            bail!("no such key")
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "no such key");
    }

    #[test]
    fn panicking_worker_reports_missing_reply() {
        let err = call_with_timeout::<(), _>(Duration::from_millis(500), "query", || {
            panic!("worker died")
        })
        .unwrap_err();
        assert!(err.to_string().contains("without a reply"));
    }

    #[test]
    fn released_connection_is_reopened() {
        let opens = Arc::new(AtomicUsize::new(0));
        let slot: ConnectionSlot<usize> = ConnectionSlot::new();
        let connect = || Ok(opens.fetch_add(1, Ordering::SeqCst));

        assert_eq!(slot.get_or_connect(connect).unwrap(), 0);
        assert_eq!(slot.get_or_connect(connect).unwrap(), 0);
        assert_eq!(opens.load(Ordering::SeqCst), 1);

        assert!(slot.release());
        assert!(!slot.release());

        assert_eq!(slot.get_or_connect(connect).unwrap(), 1);
        assert_eq!(opens.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failed_connect_leaves_slot_empty() {
        let slot: ConnectionSlot<u8> = ConnectionSlot::new();
        assert!(slot.get_or_connect(|| bail!("no system bus")).is_err());
        assert!(!slot.release());
        assert_eq!(slot.get_or_connect(|| Ok(7)).unwrap(), 7);
    }
}
