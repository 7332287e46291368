mod board;
mod catalog;
mod color;
mod config;
mod error;
mod form;
mod plant;
mod stroke;
mod tools;

pub use board::Board;
pub use catalog::{load_catalog, parse_catalog, DragState, PlantCatalog};
pub use color::{random_color, sanitize_color};
pub use config::{BoardConfig, DEFAULT_SIDEBAR_WIDTH, DEFAULT_STORAGE_KEY, LABEL_GAP};
pub use error::{Error, Result};
pub use form::PlantForm;
pub use plant::{Plant, FALLBACK_PLANT_COLOR};
pub use stroke::{Stroke, StrokeKind, StrokeModel};
pub use tools::{
    sanitize_size, Tool, ToolSettings, DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
