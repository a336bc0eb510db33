use crate::ray::Ray;
use crate::sphere::hit_sphere;
use crate::vec3::{Color, Point3};

/// The fixed scene: one sphere and the three colors the renderer can ever
/// produce. Passed around explicitly so nothing hides in module state.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub sphere_center: Point3,
    pub sphere_radius: f64,
    pub hit_color: Color,
    pub horizon: Color,
    pub zenith: Color,
}

impl Scene {
    /// Flat hit color when the ray meets the sphere, otherwise a vertical
    /// blend from horizon to zenith driven by the ray's unit direction.
    pub fn ray_color(&self, ray: &Ray) -> Color {
        if hit_sphere(self.sphere_center, self.sphere_radius, ray) {
            return self.hit_color;
        }

        let unit_dir = ray.dir.unit_vec();
        let a = 0.5 * (unit_dir.y() + 1.);
        (1. - a) * self.horizon + a * self.zenith
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Vec3;

    fn scene() -> Scene {
        Scene {
            sphere_center: vec3!(0., 0., -1.),
            sphere_radius: 0.5,
            hit_color: vec3!(1., 0., 0.),
            horizon: vec3!(1., 1., 1.),
            zenith: vec3!(0.5, 0.7, 1.0),
        }
    }

    #[test]
    fn hit_gives_flat_color() {
        let s = scene();
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., -1.));
        assert_eq!(s.ray_color(&ray), s.hit_color);
    }

    #[test]
    fn miss_blends_between_horizon_and_zenith() {
        let s = scene();
        // all three lines pass wide of the sphere
        let down = Ray::new(Vec3::empty(), vec3!(0., -3., 0.));
        let up = Ray::new(Vec3::empty(), vec3!(0., 7., 0.));
        let level = Ray::new(vec3!(5., 0., 0.), vec3!(0., 0., 1.));

        assert_eq!(s.ray_color(&down), s.horizon);
        assert_eq!(s.ray_color(&up), s.zenith);
        assert_eq!(s.ray_color(&level), 0.5 * s.horizon + 0.5 * s.zenith);
    }
}
