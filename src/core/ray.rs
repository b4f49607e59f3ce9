//! Strahl für Raycasting gegen Bodenebene und Marker-Boxen.

use glam::Vec3;

/// Halbgerade mit Ursprung und normierter Richtung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ursprung (typischerweise Kameraposition)
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Richtungen unterhalb dieser Y-Komponente gelten als parallel zur Bodenebene.
    const PARALLEL_EPSILON: f32 = 1e-6;

    /// Erstellt einen Strahl; die Richtung wird normiert.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Punkt auf dem Strahl beim Parameter `t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Schnittpunkt mit der Bodenebene y = 0.
    ///
    /// `None` wenn der Strahl parallel zur Ebene verläuft oder von ihr weg zeigt.
    pub fn intersect_ground_plane(&self) -> Option<Vec3> {
        if self.direction.y.abs() < Self::PARALLEL_EPSILON {
            return None;
        }
        let t = -self.origin.y / self.direction.y;
        if t < 0.0 {
            return None;
        }
        let hit = self.point_at(t);
        // Rundungsfehler eliminieren: der Treffer liegt per Definition auf y = 0
        Some(Vec3::new(hit.x, 0.0, hit.z))
    }

    /// Schnitt mit einer achsenparallelen Box (Slab-Test).
    ///
    /// Liefert den Abstand zum ersten Treffer; 0.0 wenn der Ursprung in der Box liegt.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let inv = self.direction.recip();
        let t1 = (min - self.origin) * inv;
        let t2 = (max - self.origin) * inv;

        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();

        if t_far < 0.0 || t_near > t_far {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ray_down_hits_ground_below_origin() {
        let ray = Ray::new(Vec3::new(2.0, 10.0, -3.0), Vec3::NEG_Y);
        let hit = ray.intersect_ground_plane().expect("Treffer erwartet");
        assert_relative_eq!(hit.x, 2.0);
        assert_relative_eq!(hit.z, -3.0);
        assert_eq!(hit.y, 0.0);
    }

    #[test]
    fn oblique_ray_hits_ground() {
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let hit = ray.intersect_ground_plane().expect("Treffer erwartet");
        assert_relative_eq!(hit.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.z, 0.0);
    }

    #[test]
    fn parallel_or_upward_ray_misses_ground() {
        let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        let upward = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        assert!(parallel.intersect_ground_plane().is_none());
        assert!(upward.intersect_ground_plane().is_none());
    }

    #[test]
    fn aabb_hit_returns_entry_distance() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        let t = ray
            .intersect_aabb(Vec3::splat(-0.5), Vec3::splat(0.5))
            .expect("Treffer erwartet");
        assert_relative_eq!(t, 9.5);
    }

    #[test]
    fn aabb_miss_and_behind() {
        let ray = Ray::new(Vec3::new(3.0, 10.0, 0.0), Vec3::NEG_Y);
        assert!(ray
            .intersect_aabb(Vec3::splat(-0.5), Vec3::splat(0.5))
            .is_none());

        let away = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::Y);
        assert!(away
            .intersect_aabb(Vec3::splat(-0.5), Vec3::splat(0.5))
            .is_none());
    }
}
