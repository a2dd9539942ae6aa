use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ombre_engine::events::{PointerBus, ScopedSubscription};
use ombre_engine::input::{GlobalPointer, GlobalPointerKind};

use crate::creator::GradientCreator;
use crate::event::SurfaceEvent;

/// A creator's subscription to document-level pointer events.
///
/// Drags keep tracking once the pointer leaves the preview, so move and
/// release have to come from the whole document. Dropping the attachment
/// releases both subscriptions.
#[must_use = "dropping the attachment detaches the creator immediately"]
#[derive(Debug)]
pub struct GlobalAttachment {
    _on_move: ScopedSubscription<GlobalPointerKind, GlobalPointer>,
    _on_release: ScopedSubscription<GlobalPointerKind, GlobalPointer>,
}

impl GlobalAttachment {
    /// Detaches now. Same as dropping.
    pub fn detach(self) {}
}

impl GradientCreator {
    /// Subscribes `creator` to move/release notifications on `source`.
    ///
    /// The attachment only holds a weak reference to the creator; events that
    /// arrive after the creator is dropped are ignored.
    pub fn attach_global(creator: &Rc<RefCell<GradientCreator>>, source: &Rc<PointerBus>) -> GlobalAttachment {
        let weak = Rc::downgrade(creator);
        let on_move = source.subscribe_scoped(GlobalPointerKind::Move, {
            let weak = weak.clone();
            move |event: &GlobalPointer| {
                if let GlobalPointer::Move(pointer) = event {
                    forward(&weak, SurfaceEvent::Move { pointer: pointer.clone() });
                }
            }
        });
        let on_release = source.subscribe_scoped(GlobalPointerKind::Release, move |_: &GlobalPointer| {
            forward(&weak, SurfaceEvent::Release);
        });
        log::debug!("gradient creator attached to global pointer events");
        GlobalAttachment { _on_move: on_move, _on_release: on_release }
    }

    /// Whether a document-level event of `kind` would change anything.
    ///
    /// Moves and releases only matter during a drag. Hosts check this before
    /// doing per-event work such as measuring the preview.
    pub fn wants_global(&self, kind: GlobalPointerKind) -> bool {
        match kind {
            GlobalPointerKind::Move | GlobalPointerKind::Release => self.dragging().is_some(),
        }
    }
}

fn forward(creator: &Weak<RefCell<GradientCreator>>, event: SurfaceEvent) {
    let Some(creator) = creator.upgrade() else {
        return;
    };
    match creator.try_borrow_mut() {
        Ok(mut creator) => {
            if !creator.handle(event).is_consumed() {
                log::trace!("global pointer event ignored; no drag in progress");
            }
        }
        Err(_) => log::warn!("global pointer event arrived while the creator was busy; dropped"),
    }
}

#[cfg(test)]
mod tests {
    use ombre_engine::coords::Rect;
    use ombre_engine::input::PointerSample;

    use super::*;
    use crate::stops::StopHandle;

    fn setup() -> (Rc<RefCell<GradientCreator>>, Rc<PointerBus>, StopHandle) {
        let creator = Rc::new(RefCell::new(GradientCreator::new()));
        creator.borrow_mut().set_bounds(Rect::new(0.0, 0.0, 10.0, 100.0));
        let top = creator.borrow().stops().handles().next().unwrap();
        (creator, Rc::new(PointerBus::new()), top)
    }

    fn press(creator: &Rc<RefCell<GradientCreator>>, stop: StopHandle) {
        creator.borrow_mut().handle(SurfaceEvent::Press { stop: Some(stop), pointer: PointerSample::empty() });
    }

    #[test]
    fn document_moves_drive_the_drag() {
        let (creator, bus, top) = setup();
        let _attachment = GradientCreator::attach_global(&creator, &bus);
        press(&creator, top);

        bus.dispatch(&GlobalPointer::Move(PointerSample::mouse(500.0, 70.0)));
        bus.dispatch(&GlobalPointer::Release);

        let c = creator.borrow();
        assert_eq!(c.stops().get(top).map(|s| s.position), Some(0.7));
        assert_eq!(c.dragging(), None);
        assert_eq!(c.selected(), Some(top));
    }

    #[test]
    fn global_events_only_wanted_while_dragging() {
        let (creator, bus, top) = setup();
        let _attachment = GradientCreator::attach_global(&creator, &bus);
        let renders = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&renders);
        creator.borrow().events().subscribe(crate::event::CreatorEventKind::Rendered, move |_| {
            *sink.borrow_mut() += 1;
        });

        assert!(!creator.borrow().wants_global(GlobalPointerKind::Move));
        assert!(!creator.borrow().wants_global(GlobalPointerKind::Release));
        bus.dispatch(&GlobalPointer::Move(PointerSample::mouse(0.0, 40.0)));
        assert_eq!(*renders.borrow(), 0);

        press(&creator, top);
        assert!(creator.borrow().wants_global(GlobalPointerKind::Move));
        assert!(creator.borrow().wants_global(GlobalPointerKind::Release));

        bus.dispatch(&GlobalPointer::Release);
        assert!(!creator.borrow().wants_global(GlobalPointerKind::Move));
    }

    #[test]
    fn detach_releases_subscriptions() {
        let (creator, bus, top) = setup();
        let attachment = GradientCreator::attach_global(&creator, &bus);
        assert!(bus.has_subscribers(GlobalPointerKind::Move));
        attachment.detach();
        assert!(!bus.has_subscribers(GlobalPointerKind::Move));
        assert!(!bus.has_subscribers(GlobalPointerKind::Release));

        press(&creator, top);
        bus.dispatch(&GlobalPointer::Move(PointerSample::mouse(0.0, 70.0)));
        assert_eq!(creator.borrow().stops().get(top).map(|s| s.position), Some(0.0));
    }

    #[test]
    fn dropped_creator_ignores_events() {
        let (creator, bus, _) = setup();
        let _attachment = GradientCreator::attach_global(&creator, &bus);
        drop(creator);
        assert_eq!(bus.dispatch(&GlobalPointer::Release), 1);
    }
}
