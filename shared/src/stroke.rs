use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeKind {
    Draw,
    Erase,
    Rectangle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub id: String,
    pub kind: StrokeKind,
    pub size: f32,
    pub points: Vec<Point>,
}

impl Stroke {
    /// Top-left corner and extent of a rectangle stroke. Extents may be negative
    /// when the pointer moved up or left of the anchor.
    pub fn rect(&self) -> Option<(Point, f32, f32)> {
        if self.kind != StrokeKind::Rectangle {
            return None;
        }
        let [anchor, corner] = self.points.as_slice() else {
            return None;
        };
        Some((*anchor, corner.x - anchor.x, corner.y - anchor.y))
    }
}

/// Committed stroke history plus the stroke being built by the current gesture.
#[derive(Clone, Debug, Default)]
pub struct StrokeModel {
    history: Vec<Stroke>,
    active: Option<Stroke>,
}

impl StrokeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture. Rectangles are seeded `rect_seed` units down and right of
    /// `point`. Returns the visible stroke count; a call made while another
    /// gesture is active is ignored.
    pub fn begin_stroke(
        &mut self,
        kind: StrokeKind,
        size: f32,
        point: Point,
        rect_seed: f32,
    ) -> usize {
        if self.active.is_some() || !point.is_finite() {
            return self.len();
        }
        let points = match kind {
            StrokeKind::Rectangle => vec![point, point.offset(rect_seed, rect_seed)],
            StrokeKind::Draw | StrokeKind::Erase => vec![point],
        };
        let stroke = Stroke {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            size,
            points,
        };
        log::debug!("stroke {} started as {:?} size {}", stroke.id, kind, size);
        self.active = Some(stroke);
        self.len()
    }

    pub fn extend_stroke(&mut self, point: Point) {
        if !point.is_finite() {
            return;
        }
        let Some(stroke) = self.active.as_mut() else {
            return;
        };
        match stroke.kind {
            StrokeKind::Rectangle => {
                if let Some(corner) = stroke.points.get_mut(1) {
                    *corner = point;
                }
            }
            StrokeKind::Draw | StrokeKind::Erase => stroke.points.push(point),
        }
    }

    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.active.take() {
            log::debug!(
                "stroke {} committed with {} points",
                stroke.id,
                stroke.points.len()
            );
            self.history.push(stroke);
        }
    }

    /// Removes the most recent stroke. An in-progress gesture counts as the most
    /// recent one and is discarded.
    pub fn undo_last(&mut self) -> Option<Stroke> {
        let removed = self.active.take().or_else(|| self.history.pop());
        if let Some(stroke) = &removed {
            log::debug!("undo removed stroke {}", stroke.id);
        }
        removed
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.active = None;
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    pub fn committed(&self) -> &[Stroke] {
        &self.history
    }

    /// Every visible stroke in paint order, the active one last.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.history.iter().chain(self.active.iter())
    }

    pub fn len(&self) -> usize {
        self.history.len() + usize::from(self.active.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SEED: f32 = 10.0;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn draw_line(model: &mut StrokeModel, kind: StrokeKind, points: &[Point]) {
        model.begin_stroke(kind, 5.0, points[0], SEED);
        for point in &points[1..] {
            model.extend_stroke(*point);
        }
        model.end_stroke();
    }

    #[test]
    fn freehand_gesture_records_every_point() {
        let mut model = StrokeModel::new();
        assert_eq!(
            model.begin_stroke(StrokeKind::Draw, 5.0, p(10.0, 10.0), SEED),
            1
        );
        model.extend_stroke(p(20.0, 20.0));
        model.extend_stroke(p(30.0, 10.0));
        model.end_stroke();

        assert_eq!(model.len(), 1);
        let stroke = &model.committed()[0];
        assert_eq!(stroke.kind, StrokeKind::Draw);
        assert_eq!(stroke.size, 5.0);
        assert_eq!(
            stroke.points,
            vec![p(10.0, 10.0), p(20.0, 20.0), p(30.0, 10.0)]
        );
    }

    #[test]
    fn erase_gesture_has_n_plus_one_points() {
        let mut model = StrokeModel::new();
        model.begin_stroke(StrokeKind::Erase, 12.0, p(0.0, 0.0), SEED);
        for i in 1..=7 {
            model.extend_stroke(p(i as f32, i as f32));
        }
        model.end_stroke();
        assert_eq!(model.committed()[0].points.len(), 8);
        assert_eq!(model.committed()[0].size, 12.0);
    }

    #[test]
    fn rectangle_keeps_two_points_and_replaces_corner() {
        let mut model = StrokeModel::new();
        model.begin_stroke(StrokeKind::Rectangle, 5.0, p(5.0, 5.0), SEED);
        assert_eq!(
            model.active().map(|s| s.points.clone()),
            Some(vec![p(5.0, 5.0), p(15.0, 15.0)])
        );

        model.extend_stroke(p(40.0, 50.0));
        model.extend_stroke(p(60.0, 20.0));
        model.end_stroke();

        let stroke = &model.committed()[0];
        assert_eq!(stroke.points, vec![p(5.0, 5.0), p(60.0, 20.0)]);
        assert_eq!(stroke.rect(), Some((p(5.0, 5.0), 55.0, 15.0)));
    }

    #[test]
    fn rect_is_none_for_freehand() {
        let mut model = StrokeModel::new();
        draw_line(&mut model, StrokeKind::Draw, &[p(0.0, 0.0), p(1.0, 1.0)]);
        assert_eq!(model.committed()[0].rect(), None);
    }

    #[test]
    fn begin_is_ignored_while_gesture_active() {
        let mut model = StrokeModel::new();
        model.begin_stroke(StrokeKind::Draw, 5.0, p(0.0, 0.0), SEED);
        assert_eq!(
            model.begin_stroke(StrokeKind::Erase, 9.0, p(3.0, 3.0), SEED),
            1
        );
        let active = model.active().cloned();
        assert_eq!(active.as_ref().map(|s| s.kind), Some(StrokeKind::Draw));
        assert_eq!(active.map(|s| s.points.len()), Some(1));
    }

    #[test]
    fn extend_without_gesture_is_noop() {
        let mut model = StrokeModel::new();
        model.extend_stroke(p(1.0, 1.0));
        assert!(model.is_empty());

        draw_line(&mut model, StrokeKind::Draw, &[p(0.0, 0.0)]);
        model.extend_stroke(p(9.0, 9.0));
        assert_eq!(model.committed()[0].points, vec![p(0.0, 0.0)]);
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let mut model = StrokeModel::new();
        model.begin_stroke(StrokeKind::Draw, 5.0, p(f32::NAN, 0.0), SEED);
        assert!(!model.is_drawing());

        model.begin_stroke(StrokeKind::Draw, 5.0, p(0.0, 0.0), SEED);
        model.extend_stroke(p(f32::INFINITY, 1.0));
        assert_eq!(model.active().map(|s| s.points.len()), Some(1));
    }

    #[test]
    fn end_stroke_when_idle_changes_nothing() {
        let mut model = StrokeModel::new();
        model.end_stroke();
        assert!(model.is_empty());
    }

    #[test]
    fn undo_removes_exactly_the_last_stroke() {
        let mut model = StrokeModel::new();
        draw_line(&mut model, StrokeKind::Draw, &[p(0.0, 0.0), p(1.0, 0.0)]);
        draw_line(&mut model, StrokeKind::Erase, &[p(2.0, 2.0)]);
        draw_line(&mut model, StrokeKind::Rectangle, &[p(3.0, 3.0)]);
        let first_two: Vec<Stroke> = model.committed()[..2].to_vec();

        let removed = model.undo_last();
        assert_eq!(removed.map(|s| s.kind), Some(StrokeKind::Rectangle));
        assert_eq!(model.len(), 2);
        assert_eq!(model.committed(), first_two.as_slice());
    }

    #[test]
    fn undo_on_empty_model_is_idempotent() {
        let mut model = StrokeModel::new();
        assert!(model.undo_last().is_none());
        assert!(model.undo_last().is_none());
        assert_eq!(model.len(), 0);
    }

    #[test]
    fn undo_during_gesture_discards_active_stroke() {
        let mut model = StrokeModel::new();
        draw_line(&mut model, StrokeKind::Draw, &[p(0.0, 0.0)]);
        model.begin_stroke(StrokeKind::Draw, 5.0, p(5.0, 5.0), SEED);
        model.undo_last();

        assert!(!model.is_drawing());
        assert_eq!(model.len(), 1);
        model.extend_stroke(p(6.0, 6.0));
        assert_eq!(model.committed()[0].points, vec![p(0.0, 0.0)]);
    }

    #[test]
    fn iter_yields_active_stroke_last() {
        let mut model = StrokeModel::new();
        draw_line(&mut model, StrokeKind::Draw, &[p(0.0, 0.0)]);
        model.begin_stroke(StrokeKind::Erase, 5.0, p(1.0, 1.0), SEED);
        let kinds: Vec<StrokeKind> = model.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StrokeKind::Draw, StrokeKind::Erase]);
    }

    #[test]
    fn stroke_ids_are_unique() {
        let mut model = StrokeModel::new();
        for i in 0..5 {
            draw_line(&mut model, StrokeKind::Draw, &[p(i as f32, 0.0)]);
        }
        let mut ids: Vec<&str> = model.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn reset_clears_history_and_gesture() {
        let mut model = StrokeModel::new();
        draw_line(&mut model, StrokeKind::Draw, &[p(0.0, 0.0)]);
        model.begin_stroke(StrokeKind::Draw, 5.0, p(1.0, 1.0), SEED);
        model.reset();
        assert!(model.is_empty());
        assert!(!model.is_drawing());
    }
}
