//! DOM helpers: element setup, styling, and reading pointer data back out of
//! browser events.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, MouseEvent, TouchEvent};

use ombre_ui::prelude::*;

/// Class names and styling knobs for the widget's elements.
#[derive(Debug, Clone)]
pub struct DomConfig {
    /// Class of the preview bar.
    pub preview_class: String,
    /// Class of each stop element.
    pub stop_class: String,
    /// Class of the `<input type=color>`.
    pub input_class: String,
    /// Border applied to the selected stop.
    pub selected_border: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            preview_class: "gradient-preview".to_string(),
            stop_class: "gradient-stop".to_string(),
            input_class: "gradient-color".to_string(),
            selected_border: "1px inset red".to_string(),
        }
    }
}

/// Stylesheet for the widget; injected once as a `<style>` element.
pub fn generate_css(config: &DomConfig) -> String {
    let preview = &config.preview_class;
    let stop = &config.stop_class;
    format!(
        r#"
.{preview} {{
    position: relative;
    width: 40px;
    height: 300px;
    cursor: copy;
}}
.{stop} {{
    position: absolute;
    width: 12px;
    height: 12px;
    margin: -7px 0 0 -7px;
    border: 1px solid white;
    box-sizing: content-box;
    cursor: grab;
    touch-action: none;
}}
"#
    )
}

/// Inline style of one stop element: its offset along `axis`, centered on
/// the cross axis, filled with its color, bordered when selected.
///
/// Both offsets are always written so an axis switch leaves nothing stale.
pub fn stop_style(axis: Axis, stop: &Stop, selected: bool, config: &DomConfig) -> [(&'static str, String); 4] {
    let offset = format!("{}%", stop.position * 100.0);
    let centered = "50%".to_string();
    let (top, left) = match axis {
        Axis::Vertical => (offset, centered),
        Axis::Horizontal => (centered, offset),
    };
    let border = if selected { config.selected_border.clone() } else { String::new() };
    [
        ("top", top),
        ("left", left),
        ("background", stop.color.as_str().to_string()),
        ("border", border),
    ]
}

/// `#rrggbb` for a color `<input type=color>` can display, if `color` has
/// one. The input rejects everything else and would show black.
pub fn picker_value(color: &CssColor) -> Option<String> {
    let css = color.as_str().trim().to_ascii_lowercase();
    if let Some(digits) = css.strip_prefix('#') {
        return hex_digits(digits);
    }
    if let Some(args) = css.strip_prefix("rgba(").or_else(|| css.strip_prefix("rgb(")) {
        let args = args.strip_suffix(')')?;
        let mut channels = args.split(',').map(|c| c.trim().parse::<u8>().ok());
        let (r, g, b) = (channels.next()??, channels.next()??, channels.next()??);
        return Some(CssColor::hex(r, g, b).into_string());
    }
    let (r, g, b) = match css.as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "green" => (0, 128, 0),
        "gold" => (255, 215, 0),
        _ => return None,
    };
    Some(CssColor::hex(r, g, b).into_string())
}

fn hex_digits(digits: &str) -> Option<String> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(format!("#{digits}")),
        3 => Some(digits.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        })),
        _ => None,
    }
}

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(class);
    Ok(el)
}

pub fn create_color_input(document: &Document, class: &str) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("color");
    input.set_class_name(class);
    Ok(input)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("failed to set {property}: {err:?}");
    }
}

/// Client-space rectangle of `el`, as the creator's preview bounds.
pub fn client_bounds(el: &HtmlElement) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Pointer data carried by a mouse or touch event. Anything else yields an
/// empty sample.
pub fn pointer_sample(event: &Event) -> PointerSample {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return PointerSample::mouse(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
    }
    if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        let touches = touch.changed_touches();
        let points = (0..touches.length())
            .filter_map(|i| touches.item(i))
            .map(|t| Vec2::new(f64::from(t.client_x()), f64::from(t.client_y())));
        return PointerSample::touch(points);
    }
    PointerSample::empty()
}
