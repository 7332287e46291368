use permadraw_shared::{Point, Tool};

use crate::render::redraw;
use crate::state::State;

/// Returns true when the pointer started a stroke and should be captured.
pub fn start_stroke(state: &mut State, pointer_id: i32, point: Point) -> bool {
    let started = state.board.pointer_down(pointer_id, point);
    if started {
        redraw(state);
    }
    started
}

pub fn move_pointer(state: &mut State, pointer_id: i32, point: Point) {
    if state.board.pointer_move(pointer_id, point) {
        redraw(state);
    }
}

pub fn end_stroke(state: &mut State, pointer_id: i32) {
    if state.board.pointer_up(pointer_id) {
        redraw(state);
    }
}

pub fn leave_canvas(state: &mut State) {
    if state.board.pointer_leave() {
        redraw(state);
    }
}

pub fn undo(state: &mut State) {
    if state.board.undo() {
        redraw(state);
    }
}

pub fn select_tool(state: &mut State, tool: Tool) {
    state.board.select_tool(tool);
    redraw(state);
}

pub fn set_tool_size(state: &mut State, tool: Tool, size: f32) {
    state.board.set_tool_size(tool, size);
    redraw(state);
}

pub fn begin_plant_drag(state: &mut State, index: usize) -> bool {
    state.catalog.begin_drag(&mut state.drag, index)
}

/// Places the dragged plant. Returns true when the sidebar changed.
pub fn drop_plant(state: &mut State, point: Point) -> bool {
    let placed = state.catalog.drop_at(&mut state.drag, point).is_some();
    if placed {
        redraw(state);
    }
    placed
}
