use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, DragEvent, Event, HtmlButtonElement, HtmlCanvasElement,
    HtmlElement, HtmlInputElement, HtmlSpanElement, KeyboardEvent, PointerEvent, Window,
};

use permadraw_shared::{BoardConfig, Tool};

use crate::actions::{
    begin_plant_drag, drop_plant, end_stroke, leave_canvas, move_pointer, select_tool,
    set_tool_size, start_stroke, undo,
};
use crate::dom::{
    event_to_point, get_element, resize_canvas, set_canvas_mode, set_tool_button, set_visible,
    update_size_label,
};
use crate::persistence::read_catalog;
use crate::settings::start_settings;
use crate::sidebar::{plant_index_from_event, render_sidebar};
use crate::state::State;

const SETTINGS_PAGE: &str = "settings.html";

/// A size slider, its value label and the wrapper shown only for its tool.
struct SizeControl {
    tool: Tool,
    input: HtmlInputElement,
    value: HtmlSpanElement,
    wrap: HtmlElement,
}

impl SizeControl {
    fn lookup(document: &Document, tool: Tool, prefix: &str) -> Result<Self, JsValue> {
        Ok(Self {
            tool,
            input: get_element(document, &format!("{prefix}Size"))?,
            value: get_element(document, &format!("{prefix}SizeValue"))?,
            wrap: get_element(document, &format!("{prefix}SizeWrap"))?,
        })
    }
}

fn document_ready_state(document: &Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn sync_tool_ui(
    state: &State,
    tool_buttons: &[(Tool, HtmlButtonElement)],
    size_controls: &[SizeControl],
) {
    let tool = state.board.tools().tool();
    for (button_tool, button) in tool_buttons {
        set_tool_button(button, *button_tool == tool);
    }
    for control in size_controls {
        set_visible(&control.wrap, control.tool == tool);
    }
    set_canvas_mode(&state.canvas, tool);
}

fn tool_from_event(event: &Event) -> Option<Tool> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
    while let Some(element) = current {
        if let Some(name) = element.get_attribute("data-tool") {
            return name.parse().ok();
        }
        current = element.parent_element();
    }
    None
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let search = window.location().search().unwrap_or_default();
    let config = BoardConfig::from_query_with(&search, |value| {
        js_sys::decode_uri_component(value)
            .ok()
            .and_then(|decoded| decoded.as_string())
    });
    let level = if config.debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::debug!("starting with {config:?}");

    if document.get_element_by_id("plantForm").is_some() {
        return start_settings(window, document, config);
    }
    start_board(window, document, config)
}

fn start_board(window: Window, document: Document, config: BoardConfig) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let sidebar: HtmlElement = get_element(&document, "sidebar")?;
    let _ = sidebar
        .style()
        .set_property("width", &config.sidebar_css_width());
    let plant_list: HtmlElement = get_element(&document, "plantList")?;
    let toolbar: HtmlElement = get_element(&document, "toolbar")?;
    let configure_button: HtmlButtonElement = get_element(&document, "configure")?;
    let tool_buttons: Rc<Vec<(Tool, HtmlButtonElement)>> = Rc::new(vec![
        (Tool::Cursor, get_element(&document, "toolCursor")?),
        (Tool::Draw, get_element(&document, "toolPencil")?),
        (Tool::Erase, get_element(&document, "toolEraser")?),
        (Tool::Rectangle, get_element(&document, "toolRectangle")?),
    ]);
    let size_controls = Rc::new(vec![
        SizeControl::lookup(&document, Tool::Draw, "pencil")?,
        SizeControl::lookup(&document, Tool::Erase, "eraser")?,
    ]);

    let catalog = read_catalog(&window, &config.storage_key);
    log::info!("board ready with {} configured plants", catalog.len());

    let state = Rc::new(RefCell::new(State::new(
        canvas.clone(),
        ctx,
        config,
        catalog,
    )));

    {
        let state = state.borrow();
        for control in size_controls.iter() {
            let min = state.config.min_size.to_string();
            let max = state.config.max_size.to_string();
            let _ = control.input.set_attribute("min", &min);
            let _ = control.input.set_attribute("max", &max);
            if let Some(size) = state.board.tools().size_for(control.tool) {
                control.input.set_value(&size.to_string());
            }
            update_size_label(&control.input, &control.value);
        }
        sync_tool_ui(&state, &tool_buttons, &size_controls);
        render_sidebar(&document, &plant_list, state.catalog.unplaced());
    }

    {
        let mut state = state.borrow_mut();
        resize_canvas(&window, &mut state);
    }

    {
        let resize_state = state.clone();
        let window_cb = window.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            let mut state = resize_state.borrow_mut();
            resize_canvas(&window_cb, &mut state);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    {
        let key_state = state.clone();
        let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let modifier = event.meta_key() || event.ctrl_key();
            if !modifier || event.shift_key() || !event.key().eq_ignore_ascii_case("z") {
                return;
            }
            event.prevent_default();
            undo(&mut key_state.borrow_mut());
        });
        window.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
        onkeydown.forget();
    }

    {
        let tool_state = state.clone();
        let tool_buttons_cb = tool_buttons.clone();
        let size_controls_cb = size_controls.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(tool) = tool_from_event(&event) else {
                return;
            };
            let mut state = tool_state.borrow_mut();
            select_tool(&mut state, tool);
            sync_tool_ui(&state, &tool_buttons_cb, &size_controls_cb);
        });
        toolbar.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    for (index, control) in size_controls.iter().enumerate() {
        let size_state = state.clone();
        let size_controls_cb = size_controls.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            let control = &size_controls_cb[index];
            update_size_label(&control.input, &control.value);
            let size = control.input.value_as_number() as f32;
            set_tool_size(&mut size_state.borrow_mut(), control.tool, size);
        });
        control
            .input
            .add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let window_cb = window.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let search = window_cb.location().search().unwrap_or_default();
            let _ = window_cb
                .location()
                .set_href(&format!("{SETTINGS_PAGE}{search}"));
        });
        configure_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            let Some(point) = event_to_point(&down_canvas, &event) else {
                return;
            };
            let mut state = down_state.borrow_mut();
            if start_stroke(&mut state, event.pointer_id(), point) {
                event.prevent_default();
                let _ = down_canvas.set_pointer_capture(event.pointer_id());
            }
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let Some(point) = event_to_point(&move_canvas, &event) else {
                return;
            };
            move_pointer(&mut move_state.borrow_mut(), event.pointer_id(), point);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let stop_state = state.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            end_stroke(&mut stop_state.borrow_mut(), event.pointer_id());
        });
        canvas.add_event_listener_with_callback("pointerup", onstop.as_ref().unchecked_ref())?;
        canvas
            .add_event_listener_with_callback("pointercancel", onstop.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback(
            "lostpointercapture",
            onstop.as_ref().unchecked_ref(),
        )?;
        onstop.forget();
    }

    {
        let leave_state = state.clone();
        let onleave = Closure::<dyn FnMut(PointerEvent)>::new(move |_| {
            leave_canvas(&mut leave_state.borrow_mut());
        });
        canvas.add_event_listener_with_callback("pointerleave", onleave.as_ref().unchecked_ref())?;
        onleave.forget();
    }

    {
        let drag_state = state.clone();
        let ondragstart = Closure::<dyn FnMut(DragEvent)>::new(move |event: DragEvent| {
            let Some(index) = plant_index_from_event(&event) else {
                return;
            };
            if !begin_plant_drag(&mut drag_state.borrow_mut(), index) {
                return;
            }
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data("text/plain", &index.to_string());
                transfer.set_effect_allowed("move");
            }
        });
        plant_list
            .add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
        ondragstart.forget();
    }

    {
        let drag_state = state.clone();
        let ondragend = Closure::<dyn FnMut(DragEvent)>::new(move |_| {
            drag_state.borrow_mut().drag.cancel();
        });
        plant_list
            .add_event_listener_with_callback("dragend", ondragend.as_ref().unchecked_ref())?;
        ondragend.forget();
    }

    {
        let ondragover = Closure::<dyn FnMut(DragEvent)>::new(move |event: DragEvent| {
            event.prevent_default();
        });
        canvas.add_event_listener_with_callback("dragover", ondragover.as_ref().unchecked_ref())?;
        ondragover.forget();
    }

    {
        let drop_state = state.clone();
        let drop_canvas = canvas.clone();
        let drop_document = document.clone();
        let drop_list = plant_list.clone();
        let ondrop = Closure::<dyn FnMut(DragEvent)>::new(move |event: DragEvent| {
            event.prevent_default();
            let mut state = drop_state.borrow_mut();
            let Some(point) = event_to_point(&drop_canvas, &event) else {
                state.drag.cancel();
                return;
            };
            if drop_plant(&mut state, point) {
                render_sidebar(&drop_document, &drop_list, state.catalog.unplaced());
            }
        });
        canvas.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
        ondrop.forget();
    }

    log::debug!("board handlers installed");
    Ok(())
}
