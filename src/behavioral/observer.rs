//! Observer: ordered subscribers notified with the same payload.
//!
//! [`Subject::notify`] copies the subscriber list while holding the lock and
//! calls the copies after releasing it. Callbacks may therefore subscribe or
//! unsubscribe (even on the same subject) without deadlocking, and a
//! subscriber added during a notification is first called by the next one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub struct Subject<T> {
    subscribers: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: AtomicU64,
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Callback<T>)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, Arc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Call every current subscriber, in subscription order, with `data`.
    /// Returns how many were called.
    pub fn notify(&self, data: &T) -> usize {
        let snapshot: Vec<Callback<T>> = self
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        trace!(subscribers = snapshot.len(), "notifying");
        for callback in &snapshot {
            callback(data);
        }
        snapshot.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

pub fn demo() -> Vec<String> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let subject: Subject<String> = Subject::new();

    for name in ["display", "logger", "alarm"] {
        let received = Arc::clone(&received);
        subject.subscribe(move |reading: &String| {
            received
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(format!("{} got {}", name, reading));
        });
    }
    subject.notify(&"21.5C".to_string());

    let lines = received
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn test_all_subscribers_in_order() {
        let log = recorder();
        let subject: Subject<&'static str> = Subject::new();
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            subject.subscribe(move |data: &&'static str| {
                log.lock().unwrap().push(format!("{}:{}", tag, data));
            });
        }

        assert_eq!(subject.notify(&"x"), 3);
        assert_eq!(*log.lock().unwrap(), vec!["a:x", "b:x", "c:x"]);
    }

    #[test]
    fn test_subscriber_added_during_notify_waits_for_next_pass() {
        let log = recorder();
        let subject: Arc<Subject<String>> = Arc::new(Subject::new());

        let inner_subject = Arc::downgrade(&subject);
        let inner_log = log.clone();
        subject.subscribe(move |data: &String| {
            inner_log.lock().unwrap().push(format!("first:{}", data));
            if let Some(subject) = inner_subject.upgrade() {
                let late_log = inner_log.clone();
                subject.subscribe(move |data: &String| {
                    late_log.lock().unwrap().push(format!("late:{}", data));
                });
            }
        });

        assert_eq!(subject.notify(&"one".to_string()), 1);
        assert_eq!(*log.lock().unwrap(), vec!["first:one"]);

        subject.notify(&"two".to_string());
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:one", "first:two", "late:two"]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let log = recorder();
        let subject: Subject<u32> = Subject::new();
        let keep_log = log.clone();
        let drop_log = log.clone();
        subject.subscribe(move |n: &u32| keep_log.lock().unwrap().push(format!("keep {}", n)));
        let dropped =
            subject.subscribe(move |n: &u32| drop_log.lock().unwrap().push(format!("drop {}", n)));

        assert!(subject.unsubscribe(dropped));
        assert!(!subject.unsubscribe(dropped));
        subject.notify(&7);
        assert_eq!(*log.lock().unwrap(), vec!["keep 7"]);
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn test_notify_without_subscribers() {
        let subject: Subject<()> = Subject::new();
        assert!(subject.is_empty());
        assert_eq!(subject.notify(&()), 0);
    }
}
