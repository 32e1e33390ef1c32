//! Minimal trend line for a coin's recent samples.

use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::market::sparkline_points;

/// Map the 100x100 sparkline box onto `rect`.
pub fn sparkline_in_rect(samples: &[f64], rect: Rect) -> Vec<Pos2> {
    sparkline_points(samples)
        .into_iter()
        .map(|[x, y]| {
            Pos2::new(
                rect.left() + (x as f32 / 100.0) * rect.width(),
                rect.top() + (y as f32 / 100.0) * rect.height(),
            )
        })
        .collect()
}

/// Allocate `size` and stroke the sparkline into it.
pub fn render_sparkline(ui: &mut egui::Ui, samples: &[f64], size: Vec2, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let points = sparkline_in_rect(samples, rect);
    if points.len() > 1 {
        ui.painter().add(Shape::line(points, Stroke::new(2.0, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_fill_rect() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(200.0, 50.0));
        let pts = sparkline_in_rect(&[100.0, 0.0], rect);
        assert_eq!(pts, vec![Pos2::new(10.0, 20.0), Pos2::new(210.0, 70.0)]);
    }
}
