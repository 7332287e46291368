use crate::tools::{DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::Point;

pub const DEFAULT_STORAGE_KEY: &str = "plants";
pub const DEFAULT_SIDEBAR_WIDTH: f64 = 400.0;
/// Gap between the top of a plant circle and the bottom of its label.
pub const LABEL_GAP: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub debug: bool,
    pub storage_key: String,
    pub sidebar_width: f64,
    pub default_size: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub rect_seed: f32,
    pub plant_radius: f64,
    pub label_width: f64,
    pub draw_color: String,
    pub erase_color: String,
    pub rect_color: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            debug: false,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            default_size: DEFAULT_BRUSH_SIZE,
            min_size: MIN_BRUSH_SIZE,
            max_size: MAX_BRUSH_SIZE,
            rect_seed: 10.0,
            plant_radius: 40.0,
            label_width: 100.0,
            draw_color: "#df4b26".to_string(),
            erase_color: "#ffffff".to_string(),
            rect_color: "#df4b26".to_string(),
        }
    }
}

impl BoardConfig {
    /// Defaults overlaid with `debug`, `sidebar` and `storage` from a URL query
    /// string (with or without the leading `?`). Values are taken verbatim.
    pub fn from_query(search: &str) -> Self {
        Self::from_query_with(search, |value| Some(value.to_string()))
    }

    /// Like [`BoardConfig::from_query`], but every value goes through `decode`
    /// first. Pairs whose value fails to decode are skipped, as are malformed
    /// values.
    pub fn from_query_with<F>(search: &str, decode: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(value) = decode(raw) else {
                log::warn!("ignoring undecodable query value for {key}");
                continue;
            };
            match key {
                "debug" | "log" => config.debug = matches!(value.as_str(), "1" | "true"),
                "sidebar" => {
                    if let Ok(width) = value.parse::<f64>() {
                        if width.is_finite() && width >= 0.0 {
                            config.sidebar_width = width;
                        }
                    }
                }
                "storage" if !value.is_empty() => config.storage_key = value,
                _ => {}
            }
        }
        config
    }

    /// CSS width of the sidebar, kept in step with [`BoardConfig::canvas_size`].
    pub fn sidebar_css_width(&self) -> String {
        format!("{}px", self.sidebar_width)
    }

    /// Where a plant's label sits: horizontally centred on the plant and
    /// [`LABEL_GAP`] above the top of its circle. Meant for a bottom baseline.
    pub fn label_anchor(&self, center: Point) -> (f64, f64) {
        (
            center.x as f64,
            center.y as f64 - (self.plant_radius + LABEL_GAP),
        )
    }

    pub fn canvas_size(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        (
            (viewport_width - self.sidebar_width).max(0.0),
            viewport_height.max(0.0),
        )
    }
}
