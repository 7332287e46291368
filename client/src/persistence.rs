use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

use permadraw_shared::{load_catalog, Plant, PlantCatalog};

fn local_storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

fn read_raw(window: &Window, key: &str) -> Option<String> {
    local_storage(window)?.get_item(key).ok().flatten()
}

/// Seeds the board's catalog from local storage. Storage that is unavailable,
/// empty or unreadable gives an empty catalog.
pub fn read_catalog(window: &Window, key: &str) -> PlantCatalog {
    let stored = read_raw(window, key);
    load_catalog(stored.as_deref())
}

/// Appends `plant` to the stored catalog.
pub fn append_plant(window: &Window, key: &str, plant: Plant) -> Result<(), JsValue> {
    let storage =
        local_storage(window).ok_or_else(|| JsValue::from_str("Local storage unavailable"))?;
    let stored = storage.get_item(key)?;
    let payload = PlantCatalog::append_to_stored(stored.as_deref(), plant)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    storage.set_item(key, &payload)?;
    log::info!("saved plant catalog under {key:?}");
    Ok(())
}
