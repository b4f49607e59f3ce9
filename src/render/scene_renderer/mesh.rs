//! CPU-Tessellierung der Szene: Boden-Bänder für Segmente, Boxen für Marker und Wände.

use super::super::types::SceneVertex;
use crate::shared::{EditorOptions, RenderScene};
use glam::Vec3;

/// Anhebung der Boden-Bänder über y = 0, damit sie nicht mit dem Boden flimmern.
const RIBBON_LIFT: f32 = 0.002;
/// Vertices pro Box (6 Flächen × 2 Dreiecke).
pub(super) const BOX_VERTEX_COUNT: usize = 36;
/// Vertices pro Boden-Band.
pub(super) const RIBBON_VERTEX_COUNT: usize = 6;

/// Orientierte Box mit orthonormalen Achsen (u, v, w) und halben Kantenlängen.
#[derive(Debug, Clone, Copy)]
pub(super) struct OrientedBox {
    pub center: Vec3,
    pub axes: [Vec3; 3],
    pub half: [f32; 3],
    pub color: [f32; 4],
}

impl OrientedBox {
    /// Achsenparalleler Würfel (Punkt-Marker).
    fn cube(center: Vec3, size: f32, color: [f32; 4]) -> Self {
        let half = size * 0.5;
        Self {
            center,
            axes: [Vec3::X, Vec3::Y, Vec3::Z],
            half: [half; 3],
            color,
        }
    }

    /// Wand zwischen zwei Bodenpunkten. `None` für entartete Wände (Länge 0).
    fn wall(from: Vec3, to: Vec3, height: f32, thickness: f32, color: [f32; 4]) -> Option<Self> {
        let delta = Vec3::new(to.x - from.x, 0.0, to.z - from.z);
        let length = delta.length();
        if length < f32::EPSILON {
            return None;
        }
        let u = delta / length;
        let v = Vec3::Y;
        let w = u.cross(v);
        let mid = (from + to) * 0.5;

        Some(Self {
            center: Vec3::new(mid.x, height * 0.5, mid.z),
            axes: [u, v, w],
            half: [length * 0.5, height * 0.5, thickness * 0.5],
            color,
        })
    }
}

/// Erzeugt ein Quad als zwei Dreiecke, gegen den Uhrzeigersinn von `normal` aus gesehen.
///
/// Erwartet `b × c` in Richtung `normal`.
fn push_face(
    vertices: &mut Vec<SceneVertex>,
    center: Vec3,
    normal: Vec3,
    b: Vec3,
    c: Vec3,
    color: [f32; 4],
) {
    let p0 = center - b - c;
    let p1 = center + b - c;
    let p2 = center + b + c;
    let p3 = center - b + c;

    for p in [p0, p1, p2, p0, p2, p3] {
        vertices.push(SceneVertex::new(p, normal, color));
    }
}

/// Tesselliert eine orientierte Box mit nach außen zeigenden Flächen.
pub(super) fn push_box(vertices: &mut Vec<SceneVertex>, shape: &OrientedBox) {
    let [u, v, w] = shape.axes;
    let [hu, hv, hw] = shape.half;
    let (su, sv, sw) = (u * hu, v * hv, w * hw);

    // (Normale, Flächenabstand, Tangente b, Tangente c) mit b × c ∥ Normale
    let faces = [
        (u, su, sv, sw),
        (-u, -su, sw, sv),
        (v, sv, sw, su),
        (-v, -sv, su, sw),
        (w, sw, su, sv),
        (-w, -sw, sv, su),
    ];

    for (normal, offset, b, c) in faces {
        push_face(vertices, shape.center + offset, normal, b, c, shape.color);
    }
}

/// Tesselliert ein flaches Band auf der Bodenebene (Oberseite sichtbar).
pub(super) fn push_ribbon(
    vertices: &mut Vec<SceneVertex>,
    from: Vec3,
    to: Vec3,
    width: f32,
    color: [f32; 4],
) {
    let delta = Vec3::new(to.x - from.x, 0.0, to.z - from.z);
    let length = delta.length();
    if length < f32::EPSILON {
        return;
    }
    let u = delta / length;
    let mid = (from + to) * 0.5;
    let center = Vec3::new(mid.x, RIBBON_LIFT, mid.z);

    push_face(
        vertices,
        center,
        Vec3::Y,
        u * (length * 0.5),
        Vec3::Y.cross(u) * (width * 0.5),
        color,
    );
}

/// Sammelt alle sichtbaren Boxen der Szene (Marker und Wände).
fn collect_boxes(scene: &RenderScene, options: &EditorOptions) -> Vec<OrientedBox> {
    let markers = scene
        .visible_markers()
        .iter()
        .map(|m| OrientedBox::cube(m.center, m.size, m.color));
    let walls = scene.visible_walls().iter().filter_map(|wall| {
        OrientedBox::wall(
            wall.from,
            wall.to,
            options.wall_height_world,
            options.wall_thickness_world,
            wall.color,
        )
    });
    markers.chain(walls).collect()
}

/// Baut die Vertex-Liste eines Frames.
///
/// Reihenfolge: zuerst Boden-Bänder (Segmente, Vorschau), dann Boxen von
/// hinten nach vorn relativ zur Kamera. Ohne Tiefenpuffer ergibt das eine
/// korrekte Überdeckung für nicht überlappende Boxen.
pub(super) fn build_scene_vertices(scene: &RenderScene, vertices: &mut Vec<SceneVertex>) {
    let options = &scene.options;

    for segment in scene.visible_lines() {
        push_ribbon(
            vertices,
            segment.from,
            segment.to,
            options.segment_width_world,
            segment.color,
        );
    }
    if let Some(preview) = scene.preview {
        push_ribbon(
            vertices,
            preview.from,
            preview.to,
            options.segment_width_world,
            preview.color,
        );
    }

    let eye = scene.camera.position();
    let mut boxes = collect_boxes(scene, options);
    boxes.sort_by(|a, b| {
        let da = a.center.distance_squared(eye);
        let db = b.center.distance_squared(eye);
        db.total_cmp(&da)
    });

    for shape in &boxes {
        push_box(vertices, shape);
    }
}
