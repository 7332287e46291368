use serde::{Deserialize, Serialize};

use crate::Point;

pub const FALLBACK_PLANT_COLOR: &str = "#4caf50";

/// A configured plant type. `position` is set once the plant has been dropped
/// on the board and is never written to storage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Plant {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip)]
    pub position: Option<Point>,
}

impl Plant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            description: String::new(),
            color: None,
            width: None,
            position: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn fill_color(&self) -> &str {
        self.color.as_deref().unwrap_or(FALLBACK_PLANT_COLOR)
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Identity used to match a dragged record against the sidebar, ignoring
    /// placement.
    pub fn same_record(&self, other: &Plant) -> bool {
        self.name == other.name
            && self.image == other.image
            && self.description == other.description
            && self.color == other.color
            && self.width == other.width
    }
}
