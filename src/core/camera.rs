//! Orbit-Kamera für die 3D-Ansicht der Bodenebene.

use super::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// Perspektivische Orbit-Kamera um einen Zielpunkt auf der Bodenebene
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Blickziel in Welt-Koordinaten
    pub target: Vec3,
    /// Abstand zwischen Kamera und Ziel
    pub distance: f32,
    /// Drehung um die Y-Achse (Radiant)
    pub yaw: f32,
    /// Neigung über der Bodenebene (Radiant, 0 = flach, π/2 = senkrecht von oben)
    pub pitch: f32,
    /// Vertikaler Öffnungswinkel (Radiant)
    pub fov_y: f32,
}

impl Camera3D {
    /// Standard-Abstand zum Ziel.
    pub const DEFAULT_DISTANCE: f32 = 30.0;
    /// Standard-Neigung (~57°).
    pub const DEFAULT_PITCH: f32 = 1.0;
    /// Standard-Öffnungswinkel (45°).
    pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
    /// Near-Plane der Projektion.
    pub const NEAR: f32 = 0.1;
    /// Far-Plane der Projektion.
    pub const FAR: f32 = 2000.0;
    /// Minimale Neigung, damit die Bodenebene sichtbar bleibt.
    pub const PITCH_MIN: f32 = 0.1;
    /// Maximale Neigung knapp unter der Senkrechten (look_at braucht eine gültige Up-Achse).
    pub const PITCH_MAX: f32 = 1.55;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: Self::DEFAULT_DISTANCE,
            yaw: 0.0,
            pitch: Self::DEFAULT_PITCH,
            fov_y: Self::DEFAULT_FOV_Y,
        }
    }

    /// Kameraposition in Welt-Koordinaten
    pub fn position(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Verschiebt das Ziel auf der Bodenebene (delta.x → X, delta.y → Z)
    pub fn pan(&mut self, delta: Vec2) {
        self.target += Vec3::new(delta.x, 0.0, delta.y);
    }

    /// Zoomt mit Faktor (> 1 = näher) innerhalb der übergebenen Abstandsgrenzen.
    ///
    /// Ungültige Faktoren oder Grenzen (min > max, NaN) lassen den Abstand unverändert.
    pub fn zoom_by_clamped(&mut self, factor: f32, min_distance: f32, max_distance: f32) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        if min_distance.is_nan() || max_distance.is_nan() || min_distance > max_distance {
            return;
        }
        self.distance = (self.distance / factor).clamp(min_distance, max_distance);
    }

    /// Dreht die Kamera um das Ziel
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(Self::PITCH_MIN, Self::PITCH_MAX);
    }

    /// View-Matrix (rechtshändig, Y oben)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspektivische Projektion für das Seitenverhältnis
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, Self::NEAR, Self::FAR)
    }

    /// View-Projection-Matrix für die Viewport-Größe in Pixeln.
    ///
    /// Aufrufer müssen eine gültige Viewport-Größe sicherstellen.
    pub fn view_projection(&self, viewport_size: Vec2) -> Mat4 {
        let aspect = viewport_size.x / viewport_size.y;
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Konvertiert eine Pixel-Position in einen Welt-Strahl.
    ///
    /// Pixel → NDC in [-1, 1] (Y gespiegelt), Unprojektion auf die Far-Plane,
    /// Strahl von der Kameraposition durch diesen Punkt.
    /// `None` bei ungültiger Viewport-Größe.
    pub fn screen_to_ray(&self, screen_pos: Vec2, viewport_size: Vec2) -> Option<Ray> {
        if !is_valid_viewport(viewport_size) {
            return None;
        }

        let ndc_x = (screen_pos.x / viewport_size.x) * 2.0 - 1.0;
        let ndc_y = -(screen_pos.y / viewport_size.y) * 2.0 + 1.0;

        let inverse = self.view_projection(viewport_size).inverse();
        let far_point = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        let origin = self.position();

        Some(Ray::new(origin, far_point - origin))
    }

    /// Projiziert einen Welt-Punkt auf Pixel-Koordinaten.
    ///
    /// `None` bei ungültiger Viewport-Größe oder wenn der Punkt hinter der Kamera liegt.
    pub fn world_to_screen(&self, world: Vec3, viewport_size: Vec2) -> Option<Vec2> {
        if !is_valid_viewport(viewport_size) {
            return None;
        }

        let clip = self.view_projection(viewport_size) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xy() / clip.w;

        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport_size.x,
            (1.0 - ndc.y) * 0.5 * viewport_size.y,
        ))
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_viewport(viewport_size: Vec2) -> bool {
    viewport_size.is_finite() && viewport_size.x > 0.0 && viewport_size.y > 0.0
}
