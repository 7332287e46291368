use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use permadraw_shared::Plant;

/// Rebuilds the sidebar list from the unplaced plants. Each entry is draggable
/// and tagged with its index into that list.
pub fn render_sidebar(document: &Document, list_el: &HtmlElement, plants: &[Plant]) {
    list_el.set_inner_html("");
    if plants.is_empty() {
        if let Ok(empty) = document.create_element("p") {
            let _ = empty.set_attribute("class", "plant-empty");
            empty.set_text_content(Some("No plants to place. Configure some first."));
            let _ = list_el.append_child(&empty);
        }
        return;
    }
    for (index, plant) in plants.iter().enumerate() {
        let Ok(card_el) = document.create_element("div") else {
            continue;
        };
        let Ok(card) = card_el.dyn_into::<HtmlElement>() else {
            continue;
        };
        let _ = card.set_attribute("class", "plant-card");
        let _ = card.set_attribute("data-index", &index.to_string());
        let _ = card.set_attribute("title", &plant.description);
        card.set_draggable(true);

        if let Ok(swatch_el) = document.create_element("span") {
            if let Ok(swatch) = swatch_el.dyn_into::<HtmlElement>() {
                let _ = swatch.set_attribute("class", "plant-swatch");
                let _ = swatch.style().set_property("background", plant.fill_color());
                let _ = card.append_child(&swatch);
            }
        }
        if let Ok(label) = document.create_element("span") {
            let _ = label.set_attribute("class", "plant-name");
            label.set_text_content(Some(&plant.name));
            let _ = card.append_child(&label);
        }
        let _ = list_el.append_child(&card);
    }
}

/// Index of the sidebar entry an event landed on, if any.
pub fn plant_index_from_event(event: &Event) -> Option<usize> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(index) = element.get_attribute("data-index") {
            return index.parse::<usize>().ok();
        }
        current = element.parent_element();
    }
    None
}
