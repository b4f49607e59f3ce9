//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Neben den Primitiven enthält sie die Pick-Tabelle, über die ein
//! Raycast-Treffer auf einen Marker zur Punkt-ID aufgelöst wird.

use super::options::EditorOptions;
use crate::core::{Camera3D, PointId, Ray};
use glam::{Vec2, Vec3};
use indexmap::IndexMap;

/// Handle eines gerenderten Punkt-Markers (Index in der Pick-Tabelle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u32);

/// Würfel-Marker für einen Punkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPrimitive {
    pub handle: MarkerHandle,
    /// Mittelpunkt (auf halber Höhe über dem Boden)
    pub center: Vec3,
    /// Kantenlänge
    pub size: f32,
    pub color: [f32; 4],
}

impl MarkerPrimitive {
    /// Achsenparallele Box des Markers (min, max)
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = Vec3::splat(self.size * 0.5);
        (self.center - half, self.center + half)
    }
}

/// Flaches Linien-Segment auf der Bodenebene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPrimitive {
    pub from: Vec3,
    pub to: Vec3,
    pub color: [f32; 4],
}

/// Extrudierte Wand zwischen zwei Bodenpunkten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPrimitive {
    pub from: Vec3,
    pub to: Vec3,
    pub color: [f32; 4],
}

/// Gruppe gleichartiger Primitive mit gemeinsamer Sichtbarkeit
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGroup<T> {
    pub visible: bool,
    pub items: Vec<T>,
}

impl<T> PrimitiveGroup<T> {
    /// Erstellt eine Gruppe
    pub fn new(visible: bool, items: Vec<T>) -> Self {
        Self { visible, items }
    }

    /// Nur die tatsächlich gezeichneten Elemente (leer wenn unsichtbar)
    pub fn visible_items(&self) -> &[T] {
        if self.visible {
            &self.items
        } else {
            &[]
        }
    }
}

impl<T> Default for PrimitiveGroup<T> {
    fn default() -> Self {
        Self {
            visible: false,
            items: Vec::new(),
        }
    }
}

/// Seitentabelle Marker-Handle → Punkt-ID
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickTable {
    entries: IndexMap<MarkerHandle, PointId>,
}

impl PickTable {
    /// Registriert einen Marker und vergibt das nächste Handle
    pub fn register(&mut self, point_id: PointId) -> MarkerHandle {
        let handle = MarkerHandle(self.entries.len() as u32);
        self.entries.insert(handle, point_id);
        handle
    }

    /// Löst ein Handle zur Punkt-ID auf
    pub fn resolve(&self, handle: MarkerHandle) -> Option<PointId> {
        self.entries.get(&handle).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Wandmodus aktiv
    pub show_walls: bool,
    /// Punkt-Marker (Editiermodus)
    pub points: PrimitiveGroup<MarkerPrimitive>,
    /// Linien-Segmente (Editiermodus)
    pub lines: PrimitiveGroup<SegmentPrimitive>,
    /// Wände (Wandmodus)
    pub walls: PrimitiveGroup<WallPrimitive>,
    /// Vorschau vom selektierten Punkt zum eingerasteten Cursor
    pub preview: Option<SegmentPrimitive>,
    /// Marker-Handle → Punkt-ID
    pub pick_table: PickTable,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    pub fn visible_markers(&self) -> &[MarkerPrimitive] {
        self.points.visible_items()
    }

    pub fn visible_lines(&self) -> &[SegmentPrimitive] {
        self.lines.visible_items()
    }

    pub fn visible_walls(&self) -> &[WallPrimitive] {
        self.walls.visible_items()
    }

    /// Gibt zurück, ob der Viewport eine zeichenbare Größe hat.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size.x >= 1.0 && self.viewport_size.y >= 1.0
    }

    /// Nächster vom Strahl getroffener sichtbarer Marker.
    pub fn marker_hit(&self, ray: &Ray) -> Option<MarkerHandle> {
        self.visible_markers()
            .iter()
            .filter_map(|marker| {
                let (min, max) = marker.bounds();
                ray.intersect_aabb(min, max).map(|t| (t, marker.handle))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, handle)| handle)
    }

    /// Nächster getroffener Punkt, aufgelöst über die Pick-Tabelle.
    pub fn pick_point(&self, ray: &Ray) -> Option<PointId> {
        self.marker_hit(ray)
            .and_then(|handle| self.pick_table.resolve(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(table: &mut PickTable, point_id: PointId, x: f32) -> MarkerPrimitive {
        MarkerPrimitive {
            handle: table.register(point_id),
            center: Vec3::new(x, 0.5, 0.0),
            size: 1.0,
            color: [1.0; 4],
        }
    }

    fn scene_with_markers(visible: bool) -> RenderScene {
        let mut pick_table = PickTable::default();
        let items = vec![marker(&mut pick_table, 10, 0.0), marker(&mut pick_table, 11, 5.0)];
        RenderScene {
            camera: Camera3D::new(),
            viewport_size: Vec2::new(800.0, 600.0),
            show_walls: !visible,
            points: PrimitiveGroup::new(visible, items),
            lines: PrimitiveGroup::default(),
            walls: PrimitiveGroup::default(),
            preview: None,
            pick_table,
            options: EditorOptions::default(),
        }
    }

    #[test]
    fn pick_table_assigns_sequential_handles() {
        let mut table = PickTable::default();
        let a = table.register(7);
        let b = table.register(3);

        assert_eq!(a, MarkerHandle(0));
        assert_eq!(b, MarkerHandle(1));
        assert_eq!(table.resolve(b), Some(3));
        assert_eq!(table.resolve(MarkerHandle(9)), None);
    }

    #[test]
    fn hidden_group_has_no_visible_items() {
        let group = PrimitiveGroup::new(false, vec![1, 2, 3]);
        assert!(group.visible_items().is_empty());
        assert_eq!(group.items.len(), 3);
    }

    #[test]
    fn pick_resolves_nearest_marker() {
        let scene = scene_with_markers(true);
        // Flacher Strahl entlang +X trifft zuerst den Marker bei x = 0
        let ray = Ray::new(Vec3::new(-10.0, 0.5, 0.0), Vec3::X);
        assert_eq!(scene.pick_point(&ray), Some(10));

        let reverse = Ray::new(Vec3::new(20.0, 0.5, 0.0), Vec3::NEG_X);
        assert_eq!(scene.pick_point(&reverse), Some(11));
    }

    #[test]
    fn pick_ignores_hidden_markers() {
        let scene = scene_with_markers(false);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert_eq!(scene.pick_point(&ray), None);
    }

    #[test]
    fn pick_misses_empty_space() {
        let scene = scene_with_markers(true);
        let ray = Ray::new(Vec3::new(2.5, 10.0, 0.0), Vec3::NEG_Y);
        assert_eq!(scene.pick_point(&ray), None);
    }
}
