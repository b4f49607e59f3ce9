//! Achs-Einrastung für neue Segmente.

use glam::Vec3;

/// Beschränkt den Versatz von `reference` nach `target` auf die dominante Achse.
///
/// Ist |dx| > |dz|, bleibt nur der X-Anteil, sonst nur der Z-Anteil.
/// Bei Gleichstand gewinnt Z. Y ist immer 0.
pub fn snap_to_axis(reference: Vec3, target: Vec3) -> Vec3 {
    let dx = target.x - reference.x;
    let dz = target.z - reference.z;

    if dx.abs() > dz.abs() {
        Vec3::new(dx, 0.0, 0.0)
    } else {
        Vec3::new(0.0, 0.0, dz)
    }
}

/// Eingerastete Zielposition: `reference` plus achsparalleler Versatz zu `target`.
pub fn snap_point(reference: Vec3, target: Vec3) -> Vec3 {
    let snapped = reference + snap_to_axis(reference, target);
    Vec3::new(snapped.x, 0.0, snapped.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dominant_x_keeps_only_x() {
        let offset = snap_to_axis(Vec3::new(1.0, 0.0, 1.0), Vec3::new(6.0, 3.0, 2.0));
        assert_relative_eq!(offset.x, 5.0);
        assert_eq!(offset.y, 0.0);
        assert_eq!(offset.z, 0.0);
    }

    #[test]
    fn dominant_z_keeps_only_z() {
        let offset = snap_to_axis(Vec3::ZERO, Vec3::new(-1.0, 0.0, -4.0));
        assert_eq!(offset.x, 0.0);
        assert_relative_eq!(offset.z, -4.0);
    }

    #[test]
    fn tie_resolves_to_z() {
        let offset = snap_to_axis(Vec3::ZERO, Vec3::new(2.0, 0.0, -2.0));
        assert_eq!(offset.x, 0.0);
        assert_relative_eq!(offset.z, -2.0);
    }

    #[test]
    fn snap_point_stays_on_axis_through_reference() {
        let reference = Vec3::new(2.0, 0.0, 1.0);
        let snapped = snap_point(reference, Vec3::new(2.5, 0.7, 6.0));
        assert_relative_eq!(snapped.x, 2.0);
        assert_eq!(snapped.y, 0.0);
        assert_relative_eq!(snapped.z, 6.0);
    }

    #[test]
    fn exactly_one_component_is_nonzero() {
        let reference = Vec3::new(0.5, 0.0, -1.5);
        let samples = [
            Vec3::new(3.0, 0.0, 0.2),
            Vec3::new(-7.5, 0.0, 4.0),
            Vec3::new(0.6, 0.0, 9.0),
            Vec3::new(0.4, 0.0, -1.4),
            Vec3::new(-3.0, 0.0, -8.0),
        ];

        for target in samples {
            let offset = snap_to_axis(reference, target);
            let delta = target - reference;
            let nonzero = [offset.x != 0.0, offset.z != 0.0];
            assert_eq!(nonzero.iter().filter(|&&n| n).count(), 1, "target {target:?}");
            if delta.x.abs() > delta.z.abs() {
                assert_relative_eq!(offset.x, delta.x);
            } else {
                assert_relative_eq!(offset.z, delta.z);
            }
        }
    }
}
