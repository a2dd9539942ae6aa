//! Browser front end for the ombre gradient creator.
//!
//! Compiled to WASM via wasm-bindgen. Renders into a host element:
//! - a preview `<div>` whose background is the rendered gradient
//! - one absolutely positioned `<div>` per stop inside the preview
//! - an `<input type=color>` bound to the selected stop
//!
//! ```js
//! const widget = new GradientWidget(document.getElementById("editor"));
//! console.log(widget.render(), widget.stopsJson());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use ombre_ui::prelude::*;

pub mod dom;
mod widget;

pub use dom::DomConfig;

use widget::Inner;

/// A mounted gradient editor. Dropping it (or calling `free()` from JS)
/// removes its elements and listeners.
#[wasm_bindgen]
pub struct GradientWidget {
    inner: Rc<Inner>,
}

#[wasm_bindgen]
impl GradientWidget {
    /// Mounts a new editor into `container` with the default class names.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> Result<GradientWidget, JsValue> {
        Self::with_config(&container, DomConfig::default())
    }

    /// Current gradient as a CSS `background` value.
    pub fn render(&self) -> String {
        self.creator().borrow().render()
    }

    /// Stops ascending by position, as a JSON array of
    /// `{"position": number, "color": string}`.
    #[wasm_bindgen(js_name = stopsJson)]
    pub fn stops_json(&self) -> Result<String, JsValue> {
        self.creator()
            .borrow()
            .stops_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Recolors the selected stop, as if the color input had changed.
    /// Returns `false` when nothing is selected.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, css: &str) -> bool {
        self.inner.handle(SurfaceEvent::ColorChanged { color: CssColor::new(css) }).is_consumed()
    }

    /// `"vertical"` or `"horizontal"`.
    #[wasm_bindgen(js_name = setAxis)]
    pub fn set_axis(&self, name: &str) -> Result<(), JsValue> {
        let axis = Axis::from_name(name).ok_or_else(|| JsValue::from_str(&format!("unknown axis {name:?}")))?;
        self.creator().borrow_mut().set_axis(axis);
        self.inner.sync()
    }

    /// `"linear"` or `"radial"`.
    #[wasm_bindgen(js_name = setKind)]
    pub fn set_kind(&self, name: &str) -> Result<(), JsValue> {
        let kind =
            GradientKind::from_name(name).ok_or_else(|| JsValue::from_str(&format!("unknown gradient kind {name:?}")))?;
        self.creator().borrow_mut().set_kind(kind);
        Ok(())
    }
}

impl GradientWidget {
    /// Mounts with custom class names. Not exported to JS.
    pub fn with_config(container: &HtmlElement, config: DomConfig) -> Result<GradientWidget, JsValue> {
        Ok(Self { inner: Inner::mount(container, config)? })
    }

    pub fn creator(&self) -> &Rc<RefCell<GradientCreator>> {
        self.inner.creator()
    }
}
