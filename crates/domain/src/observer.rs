//! Observer — synchronous, ordered fan-out of a value to registered subscribers.
//!
//! A subject owns a [`Subscribers`] list. Notifying hands the new value to
//! every subscriber in registration order and collects the notice each one
//! produces, so callers can see exactly who reacted and how.

use crate::id::SubscriberId;

/// A subscriber reacting to values of type [`Observer::Value`].
pub trait Observer {
    /// The value broadcast by the subject.
    type Value: ?Sized;
    /// What the subscriber reports back after reacting.
    type Notice;

    /// React to a new value.
    fn update(&mut self, value: &Self::Value) -> Self::Notice;
}

/// Ordered list of subscribers with stable handles.
#[derive(Debug, Clone)]
pub struct Subscribers<O> {
    entries: Vec<(SubscriberId, O)>,
    next_id: u64,
}

impl<O> Default for Subscribers<O> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<O: Observer> Subscribers<O> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber. The same kind of subscriber may be registered
    /// more than once; each registration gets its own handle.
    pub fn register(&mut self, observer: O) -> SubscriberId {
        let id = SubscriberId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Remove the subscriber registered under `id`, returning it.
    pub fn unregister(&mut self, id: SubscriberId) -> Option<O> {
        let position = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(position).1)
    }

    /// Deliver `value` to every subscriber in registration order.
    pub fn notify(&mut self, value: &O::Value) -> Vec<O::Notice> {
        self.entries
            .iter_mut()
            .map(|(_, observer)| observer.update(value))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &O> {
        self.entries.iter().map(|(_, observer)| observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        seen: Vec<i32>,
    }

    impl Observer for Recorder {
        type Value = i32;
        type Notice = (&'static str, i32);

        fn update(&mut self, value: &i32) -> Self::Notice {
            self.seen.push(*value);
            (self.name, *value)
        }
    }

    fn recorder(name: &'static str) -> Recorder {
        Recorder {
            name,
            seen: Vec::new(),
        }
    }

    #[test]
    fn should_notify_in_registration_order() {
        let mut subs = Subscribers::new();
        subs.register(recorder("first"));
        subs.register(recorder("second"));

        let notices = subs.notify(&7);
        assert_eq!(notices, vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn should_hand_out_distinct_handles_for_duplicates() {
        let mut subs = Subscribers::new();
        let a = subs.register(recorder("same"));
        let b = subs.register(recorder("same"));
        assert_ne!(a, b);
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn should_stop_notifying_after_unregister() {
        let mut subs = Subscribers::new();
        let first = subs.register(recorder("first"));
        subs.register(recorder("second"));

        let removed = subs.unregister(first).unwrap();
        assert_eq!(removed.name, "first");

        let notices = subs.notify(&1);
        assert_eq!(notices, vec![("second", 1)]);
    }

    #[test]
    fn should_return_none_when_unregistering_twice() {
        let mut subs = Subscribers::new();
        let id = subs.register(recorder("only"));
        assert!(subs.unregister(id).is_some());
        assert!(subs.unregister(id).is_none());
        assert!(subs.is_empty());
    }

    #[test]
    fn should_let_subscribers_keep_their_own_state() {
        let mut subs = Subscribers::new();
        subs.register(recorder("log"));
        subs.notify(&1);
        subs.notify(&2);

        let seen: Vec<_> = subs.iter().flat_map(|r| r.seen.clone()).collect();
        assert_eq!(seen, vec![1, 2]);
    }
}
