//! Zentrale Konfiguration für den Floorplan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Kamera-Abstand zum Ziel.
pub const CAMERA_DISTANCE_MIN: f32 = 2.0;
/// Maximaler Kamera-Abstand zum Ziel.
pub const CAMERA_DISTANCE_MAX: f32 = 500.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Radiant pro Pixel beim Orbit mit rechter Maustaste.
pub const CAMERA_ORBIT_SENSITIVITY: f32 = 0.01;

// ── Punkt-Marker ───────────────────────────────────────────────────

/// Kantenlänge der Punkt-Marker in Welteinheiten.
pub const MARKER_SIZE_WORLD: f32 = 1.0;
/// Farbe normaler Punkt-Marker (RGBA: 0x26457F).
pub const MARKER_COLOR: [f32; 4] = rgb(0x26, 0x45, 0x7F);
/// Farbe des selektierten Punkt-Markers (RGBA: 0xFFC04C).
pub const MARKER_COLOR_SELECTED: [f32; 4] = rgb(0xFF, 0xC0, 0x4C);

// ── Segmente ────────────────────────────────────────────────────────

/// Breite der Linien-Segmente auf dem Boden in Welteinheiten.
pub const SEGMENT_WIDTH_WORLD: f32 = 0.15;
/// Farbe der Linien-Segmente (RGBA: 0x4C8BFF).
pub const SEGMENT_COLOR: [f32; 4] = rgb(0x4C, 0x8B, 0xFF);
/// Farbe der Vorschau-Linie zum Cursor (RGBA: 0xFFD281).
pub const PREVIEW_COLOR: [f32; 4] = rgb(0xFF, 0xD2, 0x81);

// ── Wände ───────────────────────────────────────────────────────────

/// Wandhöhe in Welteinheiten.
pub const WALL_HEIGHT_WORLD: f32 = 2.5;
/// Wandstärke in Welteinheiten.
pub const WALL_THICKNESS_WORLD: f32 = 0.2;
/// Wandfarbe (RGBA: 0xFFFFFF).
pub const WALL_COLOR: [f32; 4] = rgb(0xFF, 0xFF, 0xFF);

/// 8-Bit-RGB in normierte RGBA-Farbe (deckend).
const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floorplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Kantenlänge der Punkt-Marker in Welteinheiten
    pub marker_size_world: f32,
    /// Farbe normaler Punkt-Marker
    pub marker_color: [f32; 4],
    /// Farbe des selektierten Punkt-Markers
    pub marker_color_selected: [f32; 4],
    /// Punkt-IDs als Beschriftung im Viewport anzeigen
    #[serde(default)]
    pub show_point_labels: bool,

    // ── Segmente ────────────────────────────────────────────────
    /// Breite der Linien-Segmente in Welteinheiten
    pub segment_width_world: f32,
    /// Farbe der Linien-Segmente
    pub segment_color: [f32; 4],
    /// Farbe der Vorschau-Linie
    pub preview_color: [f32; 4],

    // ── Wände ───────────────────────────────────────────────────
    /// Wandhöhe in Welteinheiten
    pub wall_height_world: f32,
    /// Wandstärke in Welteinheiten
    pub wall_thickness_world: f32,
    /// Wandfarbe
    pub wall_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Kamera-Abstand
    pub camera_distance_min: f32,
    /// Maximaler Kamera-Abstand
    pub camera_distance_max: f32,
    /// Zoom-Schritt bei Menü-Buttons
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Orbit-Empfindlichkeit in Radiant pro Pixel
    #[serde(default = "default_camera_orbit_sensitivity")]
    pub camera_orbit_sensitivity: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_size_world: MARKER_SIZE_WORLD,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            show_point_labels: false,

            segment_width_world: SEGMENT_WIDTH_WORLD,
            segment_color: SEGMENT_COLOR,
            preview_color: PREVIEW_COLOR,

            wall_height_world: WALL_HEIGHT_WORLD,
            wall_thickness_world: WALL_THICKNESS_WORLD,
            wall_color: WALL_COLOR,

            camera_distance_min: CAMERA_DISTANCE_MIN,
            camera_distance_max: CAMERA_DISTANCE_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            camera_orbit_sensitivity: CAMERA_ORBIT_SENSITIVITY,
        }
    }
}

/// Serde-Default für `camera_orbit_sensitivity` (ältere TOML-Dateien).
fn default_camera_orbit_sensitivity() -> f32 {
    CAMERA_ORBIT_SENSITIVITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validation_error() {
                    None => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Some(reason) => {
                        log::warn!(
                            "Optionen-Datei ungültig ({}), verwende Standardwerte",
                            reason
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft Größen und Kamera-Grenzen. `None` wenn die Optionen nutzbar sind.
    pub fn validation_error(&self) -> Option<&'static str> {
        let sizes = [
            self.marker_size_world,
            self.segment_width_world,
            self.wall_height_world,
            self.wall_thickness_world,
            self.camera_distance_min,
            self.camera_distance_max,
            self.camera_orbit_sensitivity,
        ];
        if sizes.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Some("Größen müssen endlich und positiv sein");
        }
        if self.camera_distance_min > self.camera_distance_max {
            return Some("minimaler Kamera-Abstand größer als maximaler");
        }
        let steps = [self.camera_zoom_step, self.camera_scroll_zoom_step];
        if steps.iter().any(|v| !v.is_finite() || *v <= 1.0) {
            return Some("Zoom-Schritte müssen größer als 1 sein");
        }
        None
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplan_editor.toml")
    }

    /// Halbe Marker-Kantenlänge (Ausdehnung der Pick-Box je Achse)
    pub fn marker_half_extent(&self) -> f32 {
        self.marker_size_world * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_match_hex_palette() {
        let opts = EditorOptions::default();
        assert_eq!(opts.wall_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(opts.marker_color_selected[0], 1.0);
        assert!((opts.marker_color[2] - 0x7F as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.wall_height_world = 3.25;
        opts.show_point_labels = true;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung fehlgeschlagen");
        let parsed: EditorOptions = toml::from_str(&text).expect("Parsen fehlgeschlagen");

        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let mut text = toml::to_string_pretty(&EditorOptions::default())
            .expect("Serialisierung fehlgeschlagen");
        text = text
            .lines()
            .filter(|line| {
                !line.starts_with("camera_orbit_sensitivity") && !line.starts_with("show_point_labels")
            })
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: EditorOptions = toml::from_str(&text).expect("Parsen fehlgeschlagen");

        assert_eq!(parsed.camera_orbit_sensitivity, CAMERA_ORBIT_SENSITIVITY);
        assert!(!parsed.show_point_labels);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("floorplan_editor_does_not_exist.toml");
        let opts = EditorOptions::load_from_file(&path);
        assert_eq!(opts, EditorOptions::default());
    }

    fn load_with_replaced_line(file_name: &str, key: &str, replacement: &str) -> EditorOptions {
        let text = toml::to_string_pretty(&EditorOptions::default())
            .expect("Serialisierung fehlgeschlagen")
            .lines()
            .map(|line| {
                if line.starts_with(key) {
                    replacement.to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, text).expect("Temp-Datei sollte schreibbar sein");
        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        opts
    }

    #[test]
    fn load_with_inverted_camera_limits_falls_back_to_defaults() {
        let opts = load_with_replaced_line(
            "floorplan_editor_inverted_limits.toml",
            "camera_distance_min",
            "camera_distance_min = 600.0",
        );
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn load_with_nan_size_falls_back_to_defaults() {
        let opts = load_with_replaced_line(
            "floorplan_editor_nan_size.toml",
            "wall_height_world",
            "wall_height_world = nan",
        );
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn defaults_pass_validation() {
        assert_eq!(EditorOptions::default().validation_error(), None);

        let mut opts = EditorOptions::default();
        opts.camera_zoom_step = 1.0;
        assert!(opts.validation_error().is_some());
    }
}
