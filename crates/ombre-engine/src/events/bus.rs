use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Opaque token returned by [`EventBus::subscribe`]; pass it to
/// [`EventBus::unsubscribe`] to stop receiving events.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<P> = Rc<RefCell<dyn FnMut(&P)>>;

struct Listener<K, P> {
    id: SubscriptionId,
    kind: K,
    handler: Handler<P>,
}

// ── EventBus ──────────────────────────────────────────────────────────────

/// Single-threaded publish/subscribe hub keyed by an event kind `K`.
///
/// All methods take `&self`, so a bus can be shared through an `Rc` and
/// subscribed to from inside a running handler.
///
/// Dispatch rules:
/// - handlers run in subscription order;
/// - the listener list is snapshotted before dispatch, so handlers added or
///   removed by a handler take effect on the next publish;
/// - a handler that is re-entered (it publishes, directly or not, an event it
///   is itself subscribed to) is skipped for the nested publish.
///
/// ```rust,ignore
/// let bus: EventBus<Kind, String> = EventBus::new();
/// let id = bus.subscribe(Kind::Rendered, |css| println!("{css}"));
/// bus.publish(Kind::Rendered, &css);
/// bus.unsubscribe(id);
/// ```
pub struct EventBus<K, P> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Listener<K, P>>>,
}

impl<K: Copy + Eq, P> EventBus<K, P> {
    pub fn new() -> Self {
        Self { next_id: Cell::new(0), listeners: RefCell::new(Vec::new()) }
    }

    /// Registers `handler` for events of `kind`.
    pub fn subscribe(&self, kind: K, handler: impl FnMut(&P) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let handler: Handler<P> = Rc::new(RefCell::new(handler));
        self.listeners.borrow_mut().push(Listener { id, kind, handler });
        id
    }

    /// Removes a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|l| l.id == id) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Delivers `payload` to every handler subscribed to `kind`.
    ///
    /// Returns how many handlers ran.
    pub fn publish(&self, kind: K, payload: &P) -> usize {
        let snapshot: Vec<Handler<P>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| Rc::clone(&l.handler))
            .collect();

        let mut notified = 0;
        for handler in snapshot {
            match handler.try_borrow_mut() {
                Ok(mut f) => {
                    (&mut *f)(payload);
                    notified += 1;
                }
                Err(_) => log::warn!("event handler re-entered during publish; skipping nested call"),
            }
        }
        notified
    }

    pub fn has_subscribers(&self, kind: K) -> bool {
        self.listeners.borrow().iter().any(|l| l.kind == kind)
    }

    pub fn subscriber_count(&self, kind: K) -> usize {
        self.listeners.borrow().iter().filter(|l| l.kind == kind).count()
    }
}

impl<K: Copy + Eq + 'static, P: 'static> EventBus<K, P> {
    /// Like [`subscribe`](Self::subscribe), but the subscription is released
    /// when the returned guard is dropped.
    pub fn subscribe_scoped(
        self: &Rc<Self>,
        kind: K,
        handler: impl FnMut(&P) + 'static,
    ) -> ScopedSubscription<K, P> {
        let id = self.subscribe(kind, handler);
        ScopedSubscription { bus: Rc::downgrade(self), id }
    }
}

impl<K: Copy + Eq, P> Default for EventBus<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> fmt::Debug for EventBus<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

// ── ScopedSubscription ────────────────────────────────────────────────────

/// RAII guard for a subscription made with [`EventBus::subscribe_scoped`].
///
/// Holds only a weak reference, so it never keeps the bus alive.
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct ScopedSubscription<K: Copy + Eq, P> {
    bus: Weak<EventBus<K, P>>,
    id: SubscriptionId,
}

impl<K: Copy + Eq, P> Drop for ScopedSubscription<K, P> {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe(self.id);
        }
    }
}

impl<K: Copy + Eq, P> fmt::Debug for ScopedSubscription<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedSubscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    enum Kind { A, B }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&'static str) -> Box<dyn FnMut(&i32)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log2 = Rc::clone(&log);
        let make = move |tag: &'static str| -> Box<dyn FnMut(&i32)> {
            let log = Rc::clone(&log2);
            Box::new(move |v: &i32| log.borrow_mut().push(format!("{tag}:{v}")))
        };
        (log, make)
    }

    // ── publish ───────────────────────────────────────────────────────────

    #[test]
    fn handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        bus.subscribe(Kind::A, make("first"));
        bus.subscribe(Kind::A, make("second"));
        assert_eq!(bus.publish(Kind::A, &7), 2);
        assert_eq!(*log.borrow(), vec!["first:7", "second:7"]);
    }

    #[test]
    fn publish_filters_by_kind() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        bus.subscribe(Kind::A, make("a"));
        bus.subscribe(Kind::B, make("b"));
        bus.publish(Kind::B, &1);
        assert_eq!(*log.borrow(), vec!["b:1"]);
    }

    #[test]
    fn publish_without_subscribers_is_harmless() {
        let bus: EventBus<Kind, i32> = EventBus::new();
        assert_eq!(bus.publish(Kind::A, &0), 0);
    }

    // ── unsubscribe ───────────────────────────────────────────────────────

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let id = bus.subscribe(Kind::A, make("a"));
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(Kind::A, &1);
        assert!(log.borrow().is_empty());
        assert!(!bus.has_subscribers(Kind::A));
    }

    #[test]
    fn subscribing_during_publish_applies_next_time() {
        let bus = Rc::new(EventBus::<Kind, i32>::new());
        let hits = Rc::new(Cell::new(0));
        let inner_bus = Rc::clone(&bus);
        let inner_hits = Rc::clone(&hits);
        bus.subscribe(Kind::A, move |_| {
            let h = Rc::clone(&inner_hits);
            inner_bus.subscribe(Kind::A, move |_| h.set(h.get() + 1));
        });
        assert_eq!(bus.publish(Kind::A, &0), 1);
        assert_eq!(hits.get(), 0);
        bus.publish(Kind::A, &0);
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.subscriber_count(Kind::A), 3);
    }

    #[test]
    fn unsubscribed_mid_publish_still_sees_current_event() {
        let bus = Rc::new(EventBus::<Kind, i32>::new());
        let (log, make) = recorder();
        let victim = Rc::new(Cell::new(None));
        let inner_bus = Rc::clone(&bus);
        let inner_victim = Rc::clone(&victim);
        bus.subscribe(Kind::A, move |_| {
            if let Some(id) = inner_victim.get() {
                inner_bus.unsubscribe(id);
            }
        });
        victim.set(Some(bus.subscribe(Kind::A, make("late"))));
        bus.publish(Kind::A, &1);
        bus.publish(Kind::A, &2);
        assert_eq!(*log.borrow(), vec!["late:1"]);
    }

    #[test]
    fn reentrant_publish_skips_running_handler() {
        let bus = Rc::new(EventBus::<Kind, i32>::new());
        let calls = Rc::new(Cell::new(0));
        let inner_bus = Rc::clone(&bus);
        let inner_calls = Rc::clone(&calls);
        bus.subscribe(Kind::A, move |v| {
            inner_calls.set(inner_calls.get() + 1);
            if *v == 0 {
                assert_eq!(inner_bus.publish(Kind::A, &1), 0);
            }
        });
        assert_eq!(bus.publish(Kind::A, &0), 1);
        assert_eq!(calls.get(), 1);
    }

    // ── scoped ────────────────────────────────────────────────────────────

    #[test]
    fn scoped_subscription_releases_on_drop() {
        let bus = Rc::new(EventBus::<Kind, i32>::new());
        let (log, make) = recorder();
        let guard = bus.subscribe_scoped(Kind::A, make("s"));
        bus.publish(Kind::A, &1);
        drop(guard);
        bus.publish(Kind::A, &2);
        assert_eq!(*log.borrow(), vec!["s:1"]);
        assert_eq!(bus.subscriber_count(Kind::A), 0);
    }

    #[test]
    fn scoped_guard_outliving_bus_is_fine() {
        let bus = Rc::new(EventBus::<Kind, i32>::new());
        let guard = bus.subscribe_scoped(Kind::A, |_| {});
        drop(bus);
        drop(guard);
    }
}
