//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        control_points: state.control_points().to_vec(),
        selected: state.selection(),
        curve: state.curve_samples().clone(),
        foreground: state.view.foreground,
        background: state.view.background,
        control_point_color: state.options.color_control_point,
        selected_point_color: state.options.color_control_point_selected,
        control_point_radius: state.options.control_point_radius,
        curve_stroke_width: state.options.curve_stroke_width,
        show_info: state.view.show_info,
        cursor_label: state.view.cursor_label.clone(),
    }
}
