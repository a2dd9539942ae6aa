//! Observer plumbing.
//!
//! [`EventBus`] is the one notification mechanism in the workspace: the
//! creator publishes render/selection notifications on it, and front ends
//! feed document-level pointer events through it.

mod bus;

pub use bus::{EventBus, ScopedSubscription, SubscriptionId};

use crate::input::{GlobalPointer, GlobalPointerKind};

/// Bus carrying document-level pointer notifications.
pub type PointerBus = EventBus<GlobalPointerKind, GlobalPointer>;

impl PointerBus {
    /// Publishes `event` under its own kind.
    pub fn dispatch(&self, event: &GlobalPointer) -> usize {
        self.publish(event.kind(), event)
    }
}
