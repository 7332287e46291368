use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlSpanElement, MouseEvent, Window,
};

use permadraw_shared::{Point, Tool};

use crate::render::redraw;
use crate::state::State;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn update_size_label(input: &HtmlInputElement, value: &HtmlSpanElement) {
    value.set_text_content(Some(&input.value()));
}

pub fn set_tool_button(button: &HtmlButtonElement, active: bool) {
    let pressed = if active { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
}

/// Shows or hides a size slider's wrapper.
pub fn set_visible(element: &HtmlElement, visible: bool) {
    element.set_hidden(!visible);
}

pub fn set_canvas_mode(canvas: &HtmlCanvasElement, tool: Tool) {
    let cursor = match tool {
        Tool::Cursor => "default",
        Tool::Draw => "crosshair",
        Tool::Erase => "cell",
        Tool::Rectangle => "copy",
    };
    let _ = canvas.style().set_property("cursor", cursor);
}

pub fn set_status(status_el: &Element, state: &str, text: &str) {
    let _ = status_el.set_attribute("data-state", state);
    status_el.set_text_content(Some(text));
}

/// Sizes the canvas to the viewport minus the sidebar and repaints.
pub fn resize_canvas(window: &Window, state: &mut State) {
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let (width, height) = state.config.canvas_size(viewport_width, viewport_height);
    log::debug!(
        "resizing canvas from {}x{} to {width}x{height}",
        state.board_width,
        state.board_height
    );

    let dpr = window.device_pixel_ratio();
    state.canvas.set_width((width * dpr) as u32);
    state.canvas.set_height((height * dpr) as u32);
    let style = state.canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    let _ = state.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    state.ctx.set_line_cap("round");
    state.ctx.set_line_join("round");
    state.board_width = width;
    state.board_height = height;
    redraw(state);
}

/// Canvas-relative position of a pointer or drag event. `None` when the canvas
/// has no layout box.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Option<Point> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();
    let point = Point::new(x as f32, y as f32);
    point.is_finite().then_some(point)
}
