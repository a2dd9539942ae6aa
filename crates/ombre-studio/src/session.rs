use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::{Context, Result};

use ombre_script::{AxisName, Command, CommandKind, KindName, Pointer, Script};
use ombre_ui::prelude::*;

/// Replays scripts against one gradient creator.
///
/// Moves and releases go through a document-level [`PointerBus`], the way a
/// browser delivers them; everything else is handed to the creator directly.
pub struct Session {
    creator: Rc<RefCell<GradientCreator>>,
    pointer_bus: Rc<PointerBus>,
    _attachment: GlobalAttachment,
    /// Handles in creation order; scripts address stops by index.
    created: Rc<RefCell<Vec<StopHandle>>>,
    /// Gradients rendered since the last command was reported.
    rendered: Rc<RefCell<Vec<String>>>,
}

impl Session {
    pub fn new(config: CreatorConfig) -> Self {
        let creator = Rc::new(RefCell::new(GradientCreator::with_config(config)));
        let pointer_bus = Rc::new(PointerBus::new());
        let attachment = GradientCreator::attach_global(&creator, &pointer_bus);

        let created = Rc::new(RefCell::new(creator.borrow().stops().handles().collect::<Vec<_>>()));
        let rendered = Rc::new(RefCell::new(Vec::new()));
        {
            let c = creator.borrow();
            let sink = Rc::clone(&created);
            c.events().subscribe(CreatorEventKind::StopCreated, move |ev| {
                if let CreatorEvent::StopCreated { stop, .. } = ev {
                    sink.borrow_mut().push(*stop);
                }
            });
            let sink = Rc::clone(&rendered);
            c.events().subscribe(CreatorEventKind::Rendered, move |ev| {
                if let CreatorEvent::Rendered { css } = ev {
                    sink.borrow_mut().push(css.clone());
                }
            });
        }

        Self { creator, pointer_bus, _attachment: attachment, created, rendered }
    }

    pub fn creator(&self) -> &Rc<RefCell<GradientCreator>> {
        &self.creator
    }

    /// Runs every command, writing each rendered gradient to `out`.
    pub fn run(&mut self, script: &Script, out: &mut impl Write) -> Result<()> {
        for command in &script.commands {
            self.apply(command, out)
                .with_context(|| format!("line {}", command.line))?;
        }
        Ok(())
    }

    fn apply(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
        let line = command.line;
        match &command.kind {
            CommandKind::Bounds { x, y, w, h } => {
                self.creator.borrow_mut().set_bounds(Rect::new(*x, *y, *w, *h));
            }
            CommandKind::Axis(axis) => {
                let axis = match axis {
                    AxisName::Vertical => Axis::Vertical,
                    AxisName::Horizontal => Axis::Horizontal,
                };
                self.creator.borrow_mut().set_axis(axis);
            }
            CommandKind::Kind(kind) => {
                let kind = match *kind {
                    KindName::Linear { angle_deg } => GradientKind::Linear { angle_deg },
                    KindName::Radial => GradientKind::Radial,
                };
                self.creator.borrow_mut().set_kind(kind);
            }
            CommandKind::Press { stop } => {
                if let Some(stop) = self.stop(*stop, line) {
                    self.handle(SurfaceEvent::Press { stop: Some(stop), pointer: PointerSample::empty() });
                }
            }
            CommandKind::PressBackground => {
                self.handle(SurfaceEvent::Press { stop: None, pointer: PointerSample::empty() });
            }
            CommandKind::Move(pointer) => {
                self.pointer_bus.dispatch(&GlobalPointer::Move(sample(*pointer)));
            }
            CommandKind::Release => {
                self.pointer_bus.dispatch(&GlobalPointer::Release);
            }
            CommandKind::DoubleClick(pointer) => {
                self.handle(SurfaceEvent::DoubleClick { pointer: sample(*pointer) });
            }
            CommandKind::Click { stop } => {
                if let Some(stop) = self.stop(*stop, line) {
                    self.handle(SurfaceEvent::Click { stop });
                }
            }
            CommandKind::Color(css) => {
                self.handle(SurfaceEvent::ColorChanged { color: CssColor::new(css.as_str()) });
            }
            CommandKind::Render => {
                let css = self.creator.borrow().render();
                writeln!(out, "{line:>4} = {css}")?;
            }
            CommandKind::Stops => {
                let json = self.creator.borrow().stops_json().context("serializing stops")?;
                writeln!(out, "{line:>4} : {json}")?;
            }
        }

        for css in self.rendered.borrow_mut().drain(..) {
            writeln!(out, "{line:>4} | {css}")?;
        }
        Ok(())
    }

    fn handle(&self, event: SurfaceEvent) {
        if !self.creator.borrow_mut().handle(event.clone()).is_consumed() {
            log::debug!("ignored {event:?}");
        }
    }

    fn stop(&self, index: usize, line: usize) -> Option<StopHandle> {
        let stop = self.created.borrow().get(index).copied();
        if stop.is_none() {
            log::warn!("line {line}: no stop #{index}; command skipped");
        }
        stop
    }
}

fn sample(pointer: Pointer) -> PointerSample {
    match pointer {
        Pointer::Mouse { x, y } => PointerSample::mouse(x, y),
        Pointer::Touch { x, y } => PointerSample::touch([Vec2::new(x, y)]),
        Pointer::Empty => PointerSample::empty(),
    }
}
