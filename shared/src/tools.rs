use std::str::FromStr;

use crate::StrokeKind;

pub const MIN_BRUSH_SIZE: f32 = 1.0;
pub const MAX_BRUSH_SIZE: f32 = 50.0;
pub const DEFAULT_BRUSH_SIZE: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    Cursor,
    #[default]
    Draw,
    Erase,
    Rectangle,
}

impl Tool {
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Cursor => None,
            Tool::Draw => Some(StrokeKind::Draw),
            Tool::Erase => Some(StrokeKind::Erase),
            Tool::Rectangle => Some(StrokeKind::Rectangle),
        }
    }

    /// The cursor tool hands the canvas over to drag and drop.
    pub fn handles_gestures(self) -> bool {
        self != Tool::Cursor
    }

    pub fn shows_brush_preview(self) -> bool {
        matches!(self, Tool::Draw | Tool::Erase)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Cursor => "cursor",
            Tool::Draw => "pencil",
            Tool::Erase => "eraser",
            Tool::Rectangle => "rectangle",
        }
    }
}

impl FromStr for Tool {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cursor" => Ok(Tool::Cursor),
            "pencil" | "draw" => Ok(Tool::Draw),
            "eraser" | "erase" => Ok(Tool::Erase),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            _ => Err(()),
        }
    }
}

pub fn sanitize_size(size: f32) -> f32 {
    let size = if size.is_finite() {
        size
    } else {
        DEFAULT_BRUSH_SIZE
    };
    size.max(MIN_BRUSH_SIZE).min(MAX_BRUSH_SIZE)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolSettings {
    tool: Tool,
    draw_size: f32,
    erase_size: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            draw_size: DEFAULT_BRUSH_SIZE,
            erase_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl ToolSettings {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn select(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("tool {} -> {}", self.tool.name(), tool.name());
        }
        self.tool = tool;
    }

    /// Selects a tool by its button name. Unknown names leave the selection
    /// untouched and return false.
    pub fn select_named(&mut self, name: &str) -> bool {
        match name.parse::<Tool>() {
            Ok(tool) => {
                self.select(tool);
                true
            }
            Err(()) => {
                log::debug!("ignoring unknown tool {name:?}");
                false
            }
        }
    }

    /// Size used by `tool`. Rectangles share the draw size; the cursor has none.
    pub fn size_for(&self, tool: Tool) -> Option<f32> {
        match tool {
            Tool::Cursor => None,
            Tool::Draw | Tool::Rectangle => Some(self.draw_size),
            Tool::Erase => Some(self.erase_size),
        }
    }

    pub fn active_size(&self) -> Option<f32> {
        self.size_for(self.tool)
    }

    pub fn set_size(&mut self, tool: Tool, size: f32) {
        let size = sanitize_size(size);
        match tool {
            Tool::Cursor => {}
            Tool::Draw | Tool::Rectangle => self.draw_size = size,
            Tool::Erase => self.erase_size = size,
        }
    }

    pub fn draw_size(&self) -> f32 {
        self.draw_size
    }

    pub fn erase_size(&self) -> f32 {
        self.erase_size
    }
}
