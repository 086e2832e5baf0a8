//! The 2D camera map view: an equirectangular world plot with one marker
//! per webcam and a hover card showing the camera's name and preview feed.

use bevy_egui::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::webcams::types::WebcamDirectory;

const MAP_BACKGROUND: Color32 = Color32::from_rgb(10, 14, 20);
const GRID_COLOR: Color32 = Color32::from_rgb(24, 36, 46);
const MARKER_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
const MARKER_RADIUS: f32 = 4.0;
const HOVER_RADIUS: f32 = 10.0;

/// Equirectangular projection into the unit square; north at the top,
/// longitude -180 at the left edge.
pub fn map_uv(latitude_deg: f64, longitude_deg: f64) -> (f32, f32) {
    (
        ((longitude_deg + 180.0) / 360.0) as f32,
        ((90.0 - latitude_deg) / 180.0) as f32,
    )
}

/// Paint the map into the current panel.
pub fn draw_camera_map(ui: &mut egui::Ui, directory: &WebcamDirectory) {
    let rect = ui.available_rect_before_wrap();
    let response = ui.allocate_rect(rect, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, egui::CornerRadius::ZERO, MAP_BACKGROUND);
    draw_graticule(&painter, rect);

    let hover_pos = response.hover_pos();
    let mut hovered: Option<(Pos2, &str, &str)> = None;

    for cam in &directory.entries {
        let (u, v) = map_uv(cam.latitude, cam.longitude);
        let pos = Pos2::new(
            rect.left() + u * rect.width(),
            rect.top() + v * rect.height(),
        );
        painter.circle_filled(pos, MARKER_RADIUS, MARKER_COLOR);
        if let Some(pointer) = hover_pos {
            if pointer.distance(pos) <= HOVER_RADIUS && hovered.is_none() {
                hovered = Some((pos, cam.name.as_str(), cam.preview_url.as_str()));
            }
        }
    }

    if let Some((pos, name, preview)) = hovered {
        let anchor = Pos2::new(pos.x + 8.0, pos.y - 8.0);
        painter.text(
            anchor,
            Align2::LEFT_BOTTOM,
            name,
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        painter.text(
            Pos2::new(anchor.x, anchor.y + 14.0),
            Align2::LEFT_TOP,
            preview,
            FontId::proportional(10.0),
            Color32::GRAY,
        );
    }

    if directory.from_fallback {
        painter.text(
            Pos2::new(rect.left() + 8.0, rect.bottom() - 8.0),
            Align2::LEFT_BOTTOM,
            "Sample cameras (no live listing)",
            FontId::proportional(11.0),
            Color32::GRAY,
        );
    }
}

/// 30-degree graticule.
fn draw_graticule(painter: &egui::Painter, rect: Rect) {
    let stroke = Stroke::new(1.0, GRID_COLOR);
    for lon_step in 0..=12 {
        let x = rect.left() + rect.width() * lon_step as f32 / 12.0;
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            stroke,
        );
    }
    for lat_step in 0..=6 {
        let y = rect.top() + rect.height() * lat_step as f32 / 6.0;
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            stroke,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_the_unit_square() {
        assert_eq!(map_uv(90.0, -180.0), (0.0, 0.0));
        assert_eq!(map_uv(-90.0, 180.0), (1.0, 1.0));
    }

    #[test]
    fn origin_lands_in_the_center() {
        let (u, v) = map_uv(0.0, 0.0);
        assert!((u - 0.5).abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn northern_latitudes_sit_in_the_upper_half() {
        let (_, v) = map_uv(40.7128, -74.0060);
        assert!(v < 0.5);
        let (_, v_south) = map_uv(-36.8485, 174.7633);
        assert!(v_south > 0.5);
    }
}
