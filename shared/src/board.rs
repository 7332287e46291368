use crate::{Point, StrokeModel, Tool, ToolSettings};

/// Drawing state for one board: strokes, tool selection, the brush preview and
/// which pointer owns the current gesture.
#[derive(Clone, Debug)]
pub struct Board {
    strokes: StrokeModel,
    tools: ToolSettings,
    cursor: Option<Point>,
    gesture_pointer: Option<i32>,
    rect_seed: f32,
}

impl Board {
    pub fn new(tools: ToolSettings, rect_seed: f32) -> Self {
        Self {
            strokes: StrokeModel::new(),
            tools,
            cursor: None,
            gesture_pointer: None,
            rect_seed,
        }
    }

    pub fn strokes(&self) -> &StrokeModel {
        &self.strokes
    }

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn gesture_pointer(&self) -> Option<i32> {
        self.gesture_pointer
    }

    /// Starts a stroke with the active tool. Returns false when the cursor tool
    /// is active or another pointer already owns a gesture.
    pub fn pointer_down(&mut self, pointer_id: i32, point: Point) -> bool {
        let tool = self.tools.tool();
        let (Some(kind), Some(size)) = (tool.stroke_kind(), self.tools.active_size()) else {
            return false;
        };
        if self.strokes.is_drawing() || !point.is_finite() {
            return false;
        }
        self.strokes.begin_stroke(kind, size, point, self.rect_seed);
        self.gesture_pointer = Some(pointer_id);
        self.cursor = Some(point);
        true
    }

    /// Tracks the brush preview and extends the stroke owned by `pointer_id`.
    /// Returns false when the move changed nothing visible.
    pub fn pointer_move(&mut self, pointer_id: i32, point: Point) -> bool {
        if !self.tools.tool().handles_gestures() {
            return false;
        }
        self.cursor = Some(point);
        if self.gesture_pointer == Some(pointer_id) {
            self.strokes.extend_stroke(point);
        }
        true
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        if self.gesture_pointer != Some(pointer_id) {
            return false;
        }
        self.gesture_pointer = None;
        self.strokes.end_stroke();
        true
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.cursor.take().is_some()
    }

    /// An in-progress gesture is dropped together with its stroke.
    pub fn undo(&mut self) -> bool {
        if self.strokes.undo_last().is_none() {
            return false;
        }
        self.gesture_pointer = None;
        true
    }

    pub fn reset(&mut self) {
        self.strokes.reset();
        self.gesture_pointer = None;
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.select(tool);
        if !tool.handles_gestures() {
            self.cursor = None;
        }
    }

    pub fn set_tool_size(&mut self, tool: Tool, size: f32) {
        self.tools.set_size(tool, size);
    }
}
