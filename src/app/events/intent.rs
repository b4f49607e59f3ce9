use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert (Pixel)
    ViewportResized { size: glam::Vec2 },
    /// Zeiger über dem Viewport bewegt (Pixel relativ zum Viewport)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primärklick im Viewport (Pixel relativ zum Viewport)
    ViewportClicked { screen_pos: glam::Vec2 },
    /// Wandmodus umschalten (Leertaste)
    ToggleWallsRequested,
    /// Selektion aufheben (Escape)
    ClearSelectionRequested,
    /// Kamera-Ziel auf der Bodenebene verschieben (Welt-Einheiten X/Z)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (> 1 = näher)
    CameraZoom { factor: f32 },
    /// Kamera um das Ziel drehen (Radiant)
    CameraOrbit { delta_yaw: f32, delta_pitch: f32 },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Neuen Grundriss beginnen
    NewFloorPlanRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
