use crate::core::PointId;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe setzen
    SetViewportSize { size: glam::Vec2 },
    /// Cursor-Position auf der Bodenebene aktualisieren
    UpdateCursor { ground_pos: glam::Vec3 },
    /// Punkt selektieren (IDLE → SELECTED)
    SelectPoint { point_id: PointId },
    /// Selektion aufheben
    ClearSelection,
    /// Store: neuen Punkt hinter `after_id` anlegen und verbinden
    AddPoint { after_id: PointId, x: f32, z: f32 },
    /// Store: zwei bestehende Punkte verbinden
    ConnectPoints { point_a: PointId, point_b: PointId },
    /// Wandmodus umschalten
    ToggleWalls,
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera { factor: f32 },
    /// Kamera drehen
    OrbitCamera { delta_yaw: f32, delta_pitch: f32 },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Grundriss und transienten Zustand zurücksetzen
    ResetFloorPlan,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Gibt zurück, ob der Command den Grundriss-Store verändert.
    pub fn is_store_mutation(&self) -> bool {
        matches!(
            self,
            AppCommand::AddPoint { .. } | AppCommand::ConnectPoints { .. }
        )
    }
}
