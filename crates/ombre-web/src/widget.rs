use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use ombre_ui::prelude::*;

use crate::dom::{self, DomConfig};

/// Document-level events that end up on the pointer bus.
const GLOBAL_EVENTS: [(&str, GlobalPointerKind); 4] = [
    ("mousemove", GlobalPointerKind::Move),
    ("touchmove", GlobalPointerKind::Move),
    ("mouseup", GlobalPointerKind::Release),
    ("touchend", GlobalPointerKind::Release),
];

/// Events listened for on every stop element.
const STOP_EVENTS: [&str; 4] = ["mousedown", "touchstart", "click", "dblclick"];

struct StopElement {
    el: HtmlElement,
    _listeners: Vec<EventListener>,
}

/// Shared widget state. Listeners hold it weakly, so dropping the owning
/// [`GradientWidget`](crate::GradientWidget) tears everything down.
pub(crate) struct Inner {
    config: DomConfig,
    document: Document,
    creator: Rc<RefCell<GradientCreator>>,
    pointer_bus: Rc<PointerBus>,
    _attachment: GlobalAttachment,
    preview: HtmlElement,
    input: HtmlInputElement,
    style: HtmlElement,
    stops: RefCell<HashMap<StopHandle, StopElement>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Inner {
    pub(crate) fn mount(container: &HtmlElement, config: DomConfig) -> Result<Rc<Self>, JsValue> {
        let document = dom::document()?;

        let style: HtmlElement = document.create_element("style")?.dyn_into()?;
        style.set_text_content(Some(&dom::generate_css(&config)));
        let preview = dom::create_div(&document, &config.preview_class)?;
        let input = dom::create_color_input(&document, &config.input_class)?;
        container.append_child(&style)?;
        container.append_child(&preview)?;
        container.append_child(&input)?;

        let creator = Rc::new(RefCell::new(GradientCreator::new()));
        let pointer_bus = Rc::new(PointerBus::new());
        let attachment = GradientCreator::attach_global(&creator, &pointer_bus);

        {
            let c = creator.borrow();
            let target = preview.clone();
            c.events().subscribe(CreatorEventKind::Rendered, move |ev| {
                if let CreatorEvent::Rendered { css } = ev {
                    dom::set_style(&target, "background", css);
                }
            });
            let target = input.clone();
            c.events().subscribe(CreatorEventKind::SelectionChanged, move |ev| {
                if let CreatorEvent::SelectionChanged { color, .. } = ev {
                    match dom::picker_value(color) {
                        Some(hex) => target.set_value(&hex),
                        None => log::debug!("{color} has no #rrggbb form; color input left as is"),
                    }
                }
            });
        }

        let inner = Rc::new(Self {
            config,
            document,
            creator,
            pointer_bus,
            _attachment: attachment,
            preview,
            input,
            style,
            stops: RefCell::new(HashMap::new()),
            listeners: RefCell::new(Vec::new()),
        });
        inner.install_listeners();
        inner.sync()?;
        dom::set_style(&inner.preview, "background", &inner.creator.borrow().render());
        log::debug!("gradient widget mounted");
        Ok(inner)
    }

    pub(crate) fn creator(&self) -> &Rc<RefCell<GradientCreator>> {
        &self.creator
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        for (name, kind) in GLOBAL_EVENTS {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new(&self.document, name, move |event: &Event| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                // Idle mousemoves must not force a layout or a restyle.
                let wanted = inner.creator.try_borrow().is_ok_and(|c| c.wants_global(kind));
                if !wanted {
                    return;
                }
                let pointer = match kind {
                    GlobalPointerKind::Move => GlobalPointer::Move(dom::pointer_sample(event)),
                    GlobalPointerKind::Release => GlobalPointer::Release,
                };
                inner.refresh_bounds();
                if inner.pointer_bus.dispatch(&pointer) > 0 {
                    inner.sync_or_warn();
                }
            }));
        }

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.preview, "dblclick", move |event: &Event| {
            if let Some(inner) = weak.upgrade() {
                inner.refresh_bounds();
                inner.handle(SurfaceEvent::DoubleClick { pointer: dom::pointer_sample(event) });
            }
        }));

        let weak = Rc::downgrade(self);
        let input = self.input.clone();
        listeners.push(EventListener::new(&self.input, "input", move |_: &Event| {
            if let Some(inner) = weak.upgrade() {
                inner.handle(SurfaceEvent::ColorChanged { color: CssColor::new(input.value()) });
            }
        }));
    }

    fn stop_listeners(self: &Rc<Self>, el: &HtmlElement, stop: StopHandle) -> Vec<EventListener> {
        STOP_EVENTS
            .into_iter()
            .map(|name| {
                let weak = Rc::downgrade(self);
                EventListener::new(el, name, move |event: &Event| {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let surface = match name {
                        "click" => SurfaceEvent::Click { stop },
                        // Stops live inside the preview; a dblclick on one must not add a stop.
                        "dblclick" => {
                            event.stop_propagation();
                            return;
                        }
                        _ => {
                            inner.refresh_bounds();
                            SurfaceEvent::Press { stop: Some(stop), pointer: dom::pointer_sample(event) }
                        }
                    };
                    inner.handle(surface);
                })
            })
            .collect()
    }

    fn refresh_bounds(&self) {
        let bounds = dom::client_bounds(&self.preview);
        if let Ok(mut creator) = self.creator.try_borrow_mut() {
            creator.set_bounds(bounds);
        }
    }

    pub(crate) fn handle(self: &Rc<Self>, event: SurfaceEvent) -> EventResult {
        let result = match self.creator.try_borrow_mut() {
            Ok(mut creator) => creator.handle(event),
            Err(_) => {
                log::warn!("{event:?} arrived while the creator was busy; dropped");
                return EventResult::Ignored;
            }
        };
        if result.is_consumed() {
            self.sync_or_warn();
        }
        result
    }

    fn sync_or_warn(self: &Rc<Self>) {
        if let Err(err) = self.sync() {
            log::warn!("failed to sync stop elements: {err:?}");
        }
    }

    /// Brings the stop elements in line with the creator: creates elements
    /// for new stops and restyles all of them.
    pub(crate) fn sync(self: &Rc<Self>) -> Result<(), JsValue> {
        let creator = self.creator.borrow();
        let axis = creator.axis();
        let selected = creator.selected();
        let mut stops = self.stops.borrow_mut();

        for (handle, stop) in creator.stops().entries_sorted() {
            if !stops.contains_key(&handle) {
                let el = dom::create_div(&self.document, &self.config.stop_class)?;
                self.preview.append_child(&el)?;
                let listeners = self.stop_listeners(&el, handle);
                stops.insert(handle, StopElement { el, _listeners: listeners });
            }
            let Some(entry) = stops.get(&handle) else {
                continue;
            };
            for (property, value) in dom::stop_style(axis, stop, selected == Some(handle), &self.config) {
                dom::set_style(&entry.el, property, &value);
            }
        }
        Ok(())
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.style.remove();
        self.preview.remove();
        self.input.remove();
    }
}
