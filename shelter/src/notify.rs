//! Change notification for pet resources.
//!
//! Observers subscribe to a [`Resource`] and receive a [`ChangeEvent`] for
//! every successful write that affected at least one row of it. Delivery is
//! hierarchical: a write to `pets/3` reaches observers of `pets/3` and of
//! `pets`. Events travel over unbounded channels, so publishing never waits
//! on an observer, and an observer that has gone away is dropped without
//! affecting the write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::resource::Resource;

/// The kind of write that produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A pet was inserted.
    Insert,
    /// One or more pets were updated.
    Update,
    /// One or more pets were deleted.
    Delete,
}

/// A change published after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The resource written, as addressed by the request.
    pub resource: Resource,
    /// The kind of write.
    pub kind: ChangeKind,
    /// Number of rows affected.
    pub rows: usize,
}

struct Observer {
    id: u64,
    resource: Resource,
    sender: mpsc::Sender<ChangeEvent>,
}

/// Publishes change events to subscribed observers.
///
/// # Examples
///
/// ```
/// use shelter::notify::{ChangeEvent, ChangeKind, ChangeNotifier};
/// use shelter::Resource;
///
/// let notifier = ChangeNotifier::new();
/// let collection = notifier.subscribe(Resource::Collection);
///
/// notifier.publish(&ChangeEvent {
///     resource: Resource::Item(3),
///     kind: ChangeKind::Update,
///     rows: 1,
/// });
///
/// let event = collection.try_recv().unwrap();
/// assert_eq!(event.resource, Resource::Item(3));
/// ```
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Mutex<Vec<Observer>>,
    next_id: AtomicU64,
}

impl ChangeNotifier {
    /// Creates a notifier with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer for `resource`.
    ///
    /// The observer stays registered until its [`Subscription`] is dropped.
    pub fn subscribe(&self, resource: Resource) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.observers.lock().push(Observer {
            id,
            resource,
            sender,
        });
        log::debug!("observer {id} subscribed to {resource}");

        Subscription { resource, receiver }
    }

    /// Delivers `event` to every observer of its resource or an ancestor.
    ///
    /// Events with zero affected rows are not delivered. Returns the number
    /// of observers reached.
    pub fn publish(&self, event: &ChangeEvent) -> usize {
        if event.rows == 0 {
            return 0;
        }

        let targets = event.resource.ancestors_and_self();
        let mut delivered = 0;

        self.observers.lock().retain(|observer| {
            if !targets.contains(&observer.resource) {
                return true;
            }
            if observer.sender.send(event.clone()).is_ok() {
                delivered += 1;
                true
            } else {
                log::debug!("observer {} disconnected; removing", observer.id);
                false
            }
        });

        delivered
    }

    /// Returns the number of registered observers.
    ///
    /// Observers whose subscription was dropped are counted until the next
    /// publish that targets them.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// The receiving end of an observer registration.
#[derive(Debug)]
pub struct Subscription {
    resource: Resource,
    receiver: mpsc::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Returns the resource observed.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    /// Returns the next pending event without blocking.
    #[must_use]
    pub fn try_recv(&self) -> Option<ChangeEvent> {
        self.receiver.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ChangeEvent> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Returns every pending event without blocking.
    #[must_use]
    pub fn drain(&self) -> Vec<ChangeEvent> {
        self.receiver.try_iter().collect()
    }
}
