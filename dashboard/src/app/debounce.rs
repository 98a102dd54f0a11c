//! # Debouncing
//!
//! Quiet-window scheduling for amount edits.
//!
//! Every edit reschedules its key: the pending timer task is aborted and a new
//! one sleeps the full window before posting [`AppEvent::DebounceElapsed`]. The
//! handler reads the field's value at that moment, so N edits inside one window
//! collapse into a single action on the final value.
//!
//! A timer may already have posted its event when a later edit aborts it. Each
//! schedule therefore hands out a fresh [`DebounceTicket`] and only the newest
//! ticket per key is honoured by [`Debouncer::fire`].

use crate::app::events::AppEvent;
use async_channel::Sender;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debounced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebounceKey {
    /// Main amount field
    Amount,
    /// Amount field of the quick-convert card at this index
    QuickAmount(usize),
}

/// Identifies one scheduled quiet window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    pub key: DebounceKey,
    generation: u64,
}

#[derive(Debug)]
struct PendingTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Per-key quiet-window timers.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    next_generation: u64,
    pending: HashMap<DebounceKey, PendingTimer>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_generation: 0,
            pending: HashMap::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the quiet window for `key`. Must be called within a tokio runtime.
    pub fn schedule(&mut self, key: DebounceKey, event_tx: Sender<AppEvent>) {
        if let Some(previous) = self.pending.remove(&key) {
            previous.handle.abort();
        }

        self.next_generation += 1;
        let ticket = DebounceTicket {
            key,
            generation: self.next_generation,
        };
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(AppEvent::DebounceElapsed(ticket)).await;
        });

        self.pending.insert(
            key,
            PendingTimer {
                generation: ticket.generation,
                handle,
            },
        );
    }

    /// Consume an elapsed ticket. Returns `false` for tickets superseded by a
    /// later [`Debouncer::schedule`] of the same key.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        match self.pending.get(&ticket.key) {
            Some(timer) if timer.generation == ticket.generation => {
                self.pending.remove(&ticket.key);
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self, key: DebounceKey) -> bool {
        self.pending.contains_key(&key)
    }

    /// Abort every pending timer.
    pub fn cancel_all(&mut self) {
        for (_, timer) in self.pending.drain() {
            timer.handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_channel::unbounded;

    async fn next_ticket(rx: &async_channel::Receiver<AppEvent>) -> DebounceTicket {
        match rx.recv().await {
            Ok(AppEvent::DebounceElapsed(ticket)) => ticket,
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_schedules_collapse_to_one_event() {
        let (tx, rx) = unbounded();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(DebounceKey::Amount, tx.clone());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(DebounceKey::Amount, tx.clone());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(DebounceKey::Amount, tx.clone());

        let ticket = next_ticket(&rx).await;
        assert!(debouncer.fire(ticket));
        assert!(!debouncer.is_pending(DebounceKey::Amount));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let (tx, rx) = unbounded();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(DebounceKey::QuickAmount(0), tx.clone());
        debouncer.schedule(DebounceKey::QuickAmount(1), tx.clone());

        let first = next_ticket(&rx).await;
        let second = next_ticket(&rx).await;
        assert!(debouncer.fire(first));
        assert!(debouncer.fire(second));
        assert_ne!(first.key, second.key);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_ticket_is_rejected() {
        let (tx, rx) = unbounded();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(DebounceKey::Amount, tx.clone());
        let stale = next_ticket(&rx).await;

        // A new edit lands after the first window posted but before it was handled.
        debouncer.schedule(DebounceKey::Amount, tx.clone());
        assert!(!debouncer.fire(stale));

        let fresh = next_ticket(&rx).await;
        assert!(debouncer.fire(fresh));
    }
}
