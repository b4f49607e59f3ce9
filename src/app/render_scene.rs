//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::snap_point;
use crate::shared::{
    MarkerPrimitive, PickTable, PrimitiveGroup, RenderScene, SegmentPrimitive, WallPrimitive,
};
use glam::{Vec2, Vec3};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reine Funktion aus Grundriss, Selektion, Cursor, Wandmodus, Kamera und Optionen.
/// Punkt- und Liniengruppe sind genau dann sichtbar, wenn der Wandmodus aus ist,
/// die Wandgruppe genau dann, wenn er an ist.
pub fn build(state: &AppState, viewport_size: Vec2) -> RenderScene {
    let plan = &state.floor_plan;
    let options = &state.options;
    let show_walls = state.interaction.show_walls;
    let selected = state.interaction.selected_point_id;

    let mut pick_table = PickTable::default();
    let half = options.marker_half_extent();
    let markers: Vec<MarkerPrimitive> = plan
        .points()
        .map(|point| {
            let color = if selected == Some(point.id) {
                options.marker_color_selected
            } else {
                options.marker_color
            };
            MarkerPrimitive {
                handle: pick_table.register(point.id),
                center: point.position() + Vec3::Y * half,
                size: options.marker_size_world,
                color,
            }
        })
        .collect();

    let mut segments = Vec::with_capacity(plan.line_count());
    let mut walls = Vec::with_capacity(plan.line_count());
    for line in plan.lines() {
        let Some((from, to)) = plan.line_endpoints(line) else {
            log::debug!("Linie {} mit fehlendem Endpunkt übersprungen", line.id);
            continue;
        };
        segments.push(SegmentPrimitive {
            from: from.position(),
            to: to.position(),
            color: options.segment_color,
        });
        walls.push(WallPrimitive {
            from: from.position(),
            to: to.position(),
            color: options.wall_color,
        });
    }

    let preview = if show_walls {
        None
    } else {
        selected
            .and_then(|id| plan.point(id))
            .zip(state.interaction.cursor_position)
            .map(|(point, cursor)| SegmentPrimitive {
                from: point.position(),
                to: snap_point(point.position(), cursor),
                color: options.preview_color,
            })
    };

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        show_walls,
        points: PrimitiveGroup::new(!show_walls, markers),
        lines: PrimitiveGroup::new(!show_walls, segments),
        walls: PrimitiveGroup::new(show_walls, walls),
        preview,
        pick_table,
        options: options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::FloorPlan;
    use approx::assert_relative_eq;
    use glam::{Vec2, Vec3};

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn two_points_one_line() -> AppState {
        let mut plan = FloorPlan::with_origin();
        plan.add_point(0, 5.0, 0.0).expect("add_point sollte gelingen");
        AppState::with_floor_plan(plan)
    }

    #[test]
    fn edit_mode_renders_markers_and_segments_only() {
        let state = two_points_one_line();

        let scene = build(&state, VIEWPORT);

        assert_eq!(scene.visible_markers().len(), 2);
        assert_eq!(scene.visible_lines().len(), 1);
        assert!(scene.visible_walls().is_empty());
        assert_eq!(scene.pick_table.len(), 2);
    }

    #[test]
    fn wall_mode_renders_walls_only() {
        let mut state = two_points_one_line();
        state.interaction.show_walls = true;

        let scene = build(&state, VIEWPORT);

        assert!(scene.visible_markers().is_empty());
        assert!(scene.visible_lines().is_empty());
        assert_eq!(scene.visible_walls().len(), 1);
        let wall = scene.visible_walls()[0];
        assert_eq!(wall.from, Vec3::ZERO);
        assert_eq!(wall.to, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn selected_marker_uses_highlight_color() {
        let mut state = two_points_one_line();
        state.interaction.selected_point_id = Some(1);

        let scene = build(&state, VIEWPORT);

        let colors: Vec<[f32; 4]> = scene.visible_markers().iter().map(|m| m.color).collect();
        assert_eq!(colors[0], state.options.marker_color);
        assert_eq!(colors[1], state.options.marker_color_selected);
    }

    #[test]
    fn preview_snaps_cursor_to_dominant_axis() {
        let mut state = two_points_one_line();
        state.interaction.selected_point_id = Some(1);
        state.interaction.cursor_position = Some(Vec3::new(6.0, 0.0, 4.0));

        let scene = build(&state, VIEWPORT);

        let preview = scene.preview.expect("Vorschau erwartet");
        assert_eq!(preview.from, Vec3::new(5.0, 0.0, 0.0));
        assert_relative_eq!(preview.to.x, 5.0);
        assert_relative_eq!(preview.to.z, 4.0);
        assert_eq!(preview.color, state.options.preview_color);
    }

    #[test]
    fn preview_requires_selection_cursor_and_edit_mode() {
        let mut state = two_points_one_line();
        state.interaction.cursor_position = Some(Vec3::new(6.0, 0.0, 4.0));
        assert!(build(&state, VIEWPORT).preview.is_none());

        state.interaction.selected_point_id = Some(0);
        state.interaction.cursor_position = None;
        assert!(build(&state, VIEWPORT).preview.is_none());

        state.interaction.cursor_position = Some(Vec3::new(6.0, 0.0, 4.0));
        state.interaction.show_walls = true;
        assert!(build(&state, VIEWPORT).preview.is_none());
    }

    #[test]
    fn markers_rest_on_ground_plane() {
        let state = two_points_one_line();

        let scene = build(&state, VIEWPORT);

        for marker in scene.visible_markers() {
            let (min, _) = marker.bounds();
            assert_relative_eq!(min.y, 0.0);
        }
    }
}
