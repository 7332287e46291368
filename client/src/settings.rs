use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, Window};

use permadraw_shared::{BoardConfig, PlantForm};

use crate::dom::{get_element, set_status};
use crate::persistence::append_plant;
use crate::util::random_u32;

const BOARD_PAGE: &str = "index.html";

// A color input always reports a value, so "no color chosen" is tracked by
// whether the user touched it.
const TOUCHED: &str = "data-touched";

fn read_form(
    name: &HtmlInputElement,
    width: &HtmlInputElement,
    color: &HtmlInputElement,
) -> PlantForm {
    let color = if color.has_attribute(TOUCHED) {
        color.value()
    } else {
        String::new()
    };
    PlantForm {
        name: name.value(),
        width: width.value(),
        color,
    }
}

fn submit(
    window: &Window,
    config: &BoardConfig,
    form: PlantForm,
    status_el: &Element,
) -> Result<(), JsValue> {
    let plant = match form.into_plant(random_u32()) {
        Ok(plant) => plant,
        Err(error) => {
            log::debug!("plant form rejected: {error}");
            set_status(status_el, "error", &error.to_string());
            return Ok(());
        }
    };
    log::info!("adding plant {:?} ({:?})", plant.name, plant.color);
    append_plant(window, &config.storage_key, plant)?;
    let search = window.location().search().unwrap_or_default();
    window
        .location()
        .set_href(&format!("{BOARD_PAGE}{search}"))
}

pub fn start_settings(
    window: Window,
    document: Document,
    config: BoardConfig,
) -> Result<(), JsValue> {
    let form: HtmlFormElement = get_element(&document, "plantForm")?;
    let name_input: HtmlInputElement = get_element(&document, "plantName")?;
    let width_input: HtmlInputElement = get_element(&document, "plantWidth")?;
    let color_input: HtmlInputElement = get_element(&document, "plantColor")?;
    let status_el = document
        .get_element_by_id("formStatus")
        .ok_or_else(|| JsValue::from_str("Missing form status element"))?;

    {
        let color_cb = color_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            let _ = color_cb.set_attribute(TOUCHED, "");
        });
        color_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let window_cb = window.clone();
        let onsubmit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let values = read_form(&name_input, &width_input, &color_input);
            if let Err(err) = submit(&window_cb, &config, values, &status_el) {
                log::error!("could not save plant: {err:?}");
                set_status(&status_el, "error", "Could not save the plant.");
            }
        });
        form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
        onsubmit.forget();
    }

    log::debug!("settings page ready");
    Ok(())
}
