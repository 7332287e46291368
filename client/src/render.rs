use web_sys::CanvasRenderingContext2d;

use permadraw_shared::{BoardConfig, Plant, Point, Stroke, StrokeKind};

use crate::state::State;

fn draw_dot(ctx: &CanvasRenderingContext2d, point: Point, color: &str, size: f32) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    let _ = ctx.arc(
        point.x as f64,
        point.y as f64,
        size as f64 / 2.0,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    ctx.fill();
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], color: &str, size: f32) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() {
        draw_dot(ctx, *first, color, size);
        return;
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(size as f64);
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for point in rest {
        ctx.line_to(point.x as f64, point.y as f64);
    }
    ctx.stroke();
}

fn draw_stroke(ctx: &CanvasRenderingContext2d, config: &BoardConfig, stroke: &Stroke) {
    match stroke.kind {
        StrokeKind::Rectangle => {
            if let Some((anchor, width, height)) = stroke.rect() {
                ctx.set_fill_style_str(&config.rect_color);
                ctx.fill_rect(
                    anchor.x as f64,
                    anchor.y as f64,
                    width as f64,
                    height as f64,
                );
            }
        }
        StrokeKind::Draw => draw_polyline(ctx, &stroke.points, &config.draw_color, stroke.size),
        StrokeKind::Erase => {
            // Erasing punches through everything painted so far.
            let _ = ctx.set_global_composite_operation("destination-out");
            draw_polyline(ctx, &stroke.points, &config.erase_color, stroke.size);
            let _ = ctx.set_global_composite_operation("source-over");
        }
    }
}

fn draw_plant(ctx: &CanvasRenderingContext2d, config: &BoardConfig, plant: &Plant) {
    let Some(position) = plant.position else {
        return;
    };
    let x = position.x as f64;
    let y = position.y as f64;
    ctx.set_fill_style_str(plant.fill_color());
    ctx.begin_path();
    let _ = ctx.arc(x, y, config.plant_radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();

    ctx.set_fill_style_str("#1f1f1f");
    ctx.set_font("14px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    let (label_x, label_y) = config.label_anchor(position);
    let _ = ctx.fill_text_with_max_width(&plant.name, label_x, label_y, config.label_width);
}

fn draw_brush_preview(state: &State) {
    let tool = state.board.tools().tool();
    if !tool.shows_brush_preview() {
        return;
    }
    let (Some(cursor), Some(size)) = (state.board.cursor(), state.board.tools().active_size()) else {
        return;
    };
    let color = match tool.stroke_kind() {
        Some(StrokeKind::Erase) => &state.config.erase_color,
        _ => &state.config.draw_color,
    };
    let ctx = &state.ctx;
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let _ = ctx.arc(
        cursor.x as f64,
        cursor.y as f64,
        size as f64,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    ctx.stroke();
}

pub fn redraw(state: &State) {
    let ctx = &state.ctx;
    ctx.clear_rect(0.0, 0.0, state.board_width, state.board_height);
    for plant in state.catalog.placed() {
        draw_plant(ctx, &state.config, plant);
    }
    for stroke in state.board.strokes().iter() {
        draw_stroke(ctx, &state.config, stroke);
    }
    draw_brush_preview(state);
}
